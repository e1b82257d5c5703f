//! Simulation module
//!
//! All gameplay logic lives here:
//! - Actors and their per-tick motion
//! - Level grid, obstacle and overlap queries, win/loss status
//! - Text schema parsing
//! - The driver step that ties them together
//!
//! No rendering, input or storage dependencies.

pub mod actor;
pub mod level;
pub mod parser;
pub mod tick;

pub use actor::{Actor, ActorHandle, ActorId, ActorKind, ActorType};
pub use level::{Contact, Grid, Level, LevelStatus, Obstacle};
pub use parser::{ActorDictionary, LevelParser, Spawn};
pub use tick::{advance, tick};
