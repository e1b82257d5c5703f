//! Text schema parsing
//!
//! A schema is a list of rows; each character is a terrain cell and may also
//! spawn an actor. Terrain symbols are fixed, actor symbols come from an
//! `ActorDictionary`.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::level::{Grid, Level, Obstacle};

/// Actor constructors a schema symbol can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spawn {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl Spawn {
    /// Build the actor for a schema cell at `pos` (column, row)
    pub fn spawn(self, pos: Vec2, rng: &mut impl Rng) -> Actor {
        match self {
            Spawn::Player => Actor::player(pos),
            Spawn::Coin => Actor::coin(pos, rng),
            Spawn::HorizontalFireball => Actor::horizontal_fireball(pos),
            Spawn::VerticalFireball => Actor::vertical_fireball(pos),
            Spawn::FireRain => Actor::fire_rain(pos),
        }
    }
}

/// Symbol to actor mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorDictionary {
    entries: BTreeMap<char, Spawn>,
}

impl ActorDictionary {
    /// Empty dictionary (terrain only)
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock symbols: `@` player, `o` coin, `=` and `|` fireballs, `v` fire rain
    pub fn standard() -> Self {
        [
            ('@', Spawn::Player),
            ('o', Spawn::Coin),
            ('=', Spawn::HorizontalFireball),
            ('|', Spawn::VerticalFireball),
            ('v', Spawn::FireRain),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, symbol: char, spawn: Spawn) -> Option<Spawn> {
        self.entries.insert(symbol, spawn)
    }

    pub fn get(&self, symbol: char) -> Option<Spawn> {
        self.entries.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(char, Spawn)> for ActorDictionary {
    fn from_iter<I: IntoIterator<Item = (char, Spawn)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Turns text schemas into levels
#[derive(Debug, Clone, Default)]
pub struct LevelParser {
    dictionary: ActorDictionary,
}

impl LevelParser {
    /// The parser keeps its own copy of the dictionary
    pub fn new(dictionary: &ActorDictionary) -> Self {
        Self {
            dictionary: dictionary.clone(),
        }
    }

    pub fn dictionary(&self) -> &ActorDictionary {
        &self.dictionary
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<Spawn> {
        self.dictionary.get(symbol)
    }

    pub fn obstacle_from_symbol(&self, symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid<S: AsRef<str>>(&self, rows: &[S]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| {
                    row.as_ref()
                        .chars()
                        .map(|c| self.obstacle_from_symbol(c))
                        .collect()
                })
                .collect(),
        )
    }

    /// Actors in scan order: rows top to bottom, characters left to right
    pub fn create_actors<S: AsRef<str>>(&self, rows: &[S], rng: &mut impl Rng) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(spawn) = self.actor_from_symbol(symbol) {
                    actors.push(spawn.spawn(Vec2::new(x as f32, y as f32), rng));
                }
            }
        }
        actors
    }

    /// Parse with coin phases drawn from the thread RNG
    pub fn parse<S: AsRef<str>>(&self, rows: &[S]) -> Level {
        self.parse_with_rng(rows, &mut rand::rng())
    }

    /// Parse with reproducible coin phases
    pub fn parse_seeded<S: AsRef<str>>(&self, rows: &[S], seed: u64) -> Level {
        self.parse_with_rng(rows, &mut Pcg32::seed_from_u64(seed))
    }

    pub fn parse_with_rng<S: AsRef<str>>(&self, rows: &[S], rng: &mut impl Rng) -> Level {
        let grid = self.create_grid(rows);
        let actors = self.create_actors(rows, rng);
        log::info!(
            "Parsed level {}x{} with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
