//! Simulation settings
//!
//! Loaded from JSON; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_STEP;
use crate::error::{Error, Result};
use crate::sim::{ActorDictionary, Level, LevelParser};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema symbols that spawn actors
    pub symbols: ActorDictionary,
    /// Seed for coin phases; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Largest step `sim::advance` feeds to a single tick
    pub max_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbols: ActorDictionary::standard(),
            seed: None,
            max_step: MAX_STEP,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings ({} symbols, seed {:?}, max step {})",
            settings.symbols.len(),
            settings.seed,
            settings.max_step
        );
        Ok(settings)
    }

    /// `max_step` must be a positive, finite duration
    pub fn validate(&self) -> Result<()> {
        if !(self.max_step.is_finite() && self.max_step > 0.0) {
            return Err(Error::InvalidSetting {
                field: "max_step",
                reason: format!("must be positive and finite, got {}", self.max_step),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A parser over this configuration's symbols
    pub fn parser(&self) -> LevelParser {
        LevelParser::new(&self.symbols)
    }

    /// Parse a schema, seeding coin phases if a seed is configured
    pub fn parse<S: AsRef<str>>(&self, rows: &[S]) -> Level {
        let parser = self.parser();
        match self.seed {
            Some(seed) => parser.parse_seeded(rows, seed),
            None => parser.parse(rows),
        }
    }
}
