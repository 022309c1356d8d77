//! Snowfall error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("glyph set is empty")]
    NoGlyphs,

    #[error("invalid {field} range: min={min}, span={span}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        span: f64,
    },

    #[error("invalid max delay: {0}")]
    InvalidDelay(f64),

    #[error("repeat interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("mount target unavailable: {0}")]
    Unavailable(String),

    #[error("failed to append snowflake: {0}")]
    Append(String),
}
