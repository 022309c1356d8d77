//! Snowfall configuration.
//!
//! All fields have defaults, so a caller (typically JS via serde) only needs to
//! supply the keys it wants to change.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::flake::Glyph;

/// Half-open interval `[min, min + span)` sampled from a unit draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f64,
    pub span: f64,
}

impl UniformRange {
    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    /// Map `r` in `[0, 1)` onto the range.
    pub fn sample(&self, r: f64) -> f64 {
        self.min + r * self.span
    }

    pub fn max(&self) -> f64 {
        self.min + self.span
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max()
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.span.is_finite()
            && self.min >= 0.0
            && self.span >= 0.0
            && self.max().is_finite();
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                span: self.span,
            })
        }
    }
}

/// Whether the spawner creates one batch or keeps adding flakes afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpawnMode {
    /// One batch when the page is ready.
    #[default]
    Once,
    /// One batch, then one more flake every `interval_ms`.
    Repeating {
        #[serde(rename = "intervalMs")]
        interval_ms: u32,
    },
}

impl SpawnMode {
    pub fn repeating() -> Self {
        Self::Repeating {
            interval_ms: DEFAULT_REPEAT_INTERVAL_MS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Repeating { .. } => "repeating",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnowfallConfig {
    /// Flakes created per page-ready trigger.
    pub count: u32,
    /// Candidate glyphs, picked uniformly.
    pub glyphs: Vec<Glyph>,
    /// Font size in px.
    pub font_size: UniformRange,
    /// Fall cycle length in seconds.
    pub duration: UniformRange,
    /// Flakes start up to this many seconds into their cycle.
    pub max_delay: f64,
    pub spawn_mode: SpawnMode,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            glyphs: Glyph::ALL.to_vec(),
            font_size: UniformRange::new(FONT_SIZE_MIN_PX, FONT_SIZE_SPAN_PX),
            duration: UniformRange::new(DURATION_MIN_S, DURATION_SPAN_S),
            max_delay: DEFAULT_MAX_DELAY_S,
            spawn_mode: SpawnMode::Once,
        }
    }
}

impl SnowfallConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glyphs.is_empty() {
            return Err(ConfigError::NoGlyphs);
        }
        self.font_size.validate("fontSize")?;
        self.duration.validate("duration")?;
        if !self.max_delay.is_finite() || self.max_delay < 0.0 {
            return Err(ConfigError::InvalidDelay(self.max_delay));
        }
        if let SpawnMode::Repeating { interval_ms: 0 } = self.spawn_mode {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
