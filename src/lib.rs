//! Lava Run - simulation core of a tile-based arcade platformer
//!
//! Core modules:
//! - `sim`: Actors, level grid, collision queries, schema parsing, driver step
//! - `levels`: Level packs (ordered lists of text schemas)
//! - `settings`: Symbol dictionary and driver configuration
//! - `error`: Errors from decoding packs and settings

pub mod error;
pub mod levels;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use levels::LevelPack;
pub use settings::Settings;

/// 2D point or displacement.
///
/// `plus` is `a + b` and `times` is `a * k`; both return a new value and
/// leave the operands untouched.
pub use glam::Vec2 as Vector;

/// Game configuration constants
pub mod consts {
    /// Largest single step the driver feeds to `tick` (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// Cap on ticks per `sim::advance` call
    pub const MAX_ADVANCE_TICKS: u32 = 100_000;

    /// Ticks a level keeps running after it is won or lost
    pub const FINISH_DELAY: f32 = 1.0;

    /// Coin hitbox inset within its tile
    pub const COIN_OFFSET: (f32, f32) = (0.2, 0.1);
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    /// Coin bob angular speed (radians per time unit)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Coin bob amplitude (tiles)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Player hitbox is taller than a tile, so it spawns half a tile up
    pub const PLAYER_OFFSET: (f32, f32) = (0.0, -0.5);
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);

    pub const HORIZONTAL_FIREBALL_SPEED: (f32, f32) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f32, f32) = (0.0, 3.0);
}

/// Build a vector from one of the tuple constants above
#[inline]
pub fn vec2(v: (f32, f32)) -> Vector {
    Vector::new(v.0, v.1)
}
