//! Crate-wide error type
//!
//! Simulation calls never fail; errors only come from decoding level packs
//! and settings, or from the demo binary reading a pack from disk.

/// Errors raised while loading level data or configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level pack contains no levels")]
    EmptyPack,

    #[error("level {index} out of range (pack has {count} levels)")]
    LevelOutOfRange { index: usize, count: usize },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
