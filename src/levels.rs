//! Level packs
//!
//! A pack is a JSON array of schemas, each schema an array of row strings:
//! `[["  @  ", "xxxxx"], ["..."]]`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{Level, LevelParser};

/// Built-in levels for the demo binary
const DEMO_PACK: &str = r#"[
    [
        "                 ",
        "                 ",
        "    o       o    ",
        "  @      =       ",
        "xxxxxxxxxxxxxxxxx"
    ],
    [
        "      v          ",
        "                 ",
        "  |         o    ",
        "      o          ",
        "  @       xxxxx  ",
        "xxxxx!!!!!xxxxxxx"
    ],
    [
        "x       =       x",
        "x  o         o  x",
        "x               x",
        "x   v    |   v  x",
        "x @             x",
        "xxxxx!!!!!!!xxxxx"
    ]
]"#;

/// Ordered list of level schemas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPack {
    schemas: Vec<Vec<String>>,
}

impl LevelPack {
    pub fn from_json(json: &str) -> Result<Self> {
        let schemas: Vec<Vec<String>> = serde_json::from_str(json)?;
        if schemas.is_empty() {
            return Err(Error::EmptyPack);
        }
        log::info!("Loaded level pack with {} levels", schemas.len());
        Ok(Self { schemas })
    }

    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_PACK)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn schema(&self, index: usize) -> Option<&[String]> {
        self.schemas.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.schemas.iter().map(Vec::as_slice)
    }

    /// Parse the schema at `index` into a fresh level
    pub fn level(&self, index: usize, parser: &LevelParser) -> Result<Level> {
        let schema = self.schema(index).ok_or(Error::LevelOutOfRange {
            index,
            count: self.len(),
        })?;
        Ok(parser.parse(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActorDictionary, ActorType};

    #[test]
    fn test_from_json() {
        let pack = LevelPack::from_json(r#"[["x@x", "xox"], ["!!!"]]"#).expect("valid pack");
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.schema(1), Some(&["!!!".to_string()][..]));
        assert!(pack.schema(2).is_none());
        assert_eq!(pack.iter().count(), 2);
    }

    #[test]
    fn test_empty_pack_is_rejected() {
        assert!(matches!(LevelPack::from_json("[]"), Err(Error::EmptyPack)));
    }

    #[test]
    fn test_malformed_pack() {
        assert!(matches!(LevelPack::from_json(r#"["x@x"]"#), Err(Error::Json(_))));
        assert!(matches!(LevelPack::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_level_by_index() {
        let pack = LevelPack::from_json(r#"[["x@x", "xox"]]"#).expect("valid pack");
        let parser = LevelParser::new(&ActorDictionary::standard());

        let level = pack.level(0, &parser).expect("level 0");
        assert_eq!(level.width(), 3);
        assert!(!level.no_more_actors(ActorType::Coin));

        let err = pack.level(3, &parser).unwrap_err();
        assert!(matches!(err, Error::LevelOutOfRange { index: 3, count: 1 }));
        assert_eq!(err.to_string(), "level 3 out of range (pack has 1 levels)");
    }

    #[test]
    fn test_demo_pack() {
        let pack = LevelPack::demo().expect("built-in pack parses");
        assert_eq!(pack.len(), 3);
        let parser = LevelParser::new(&ActorDictionary::standard());
        for index in 0..pack.len() {
            let level = pack.level(index, &parser).expect("demo level");
            assert!(level.player().is_some());
            assert!(!level.no_more_actors(ActorType::Coin));
        }
    }
}
