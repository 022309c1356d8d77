//! Snowfall defaults.
//!
//! Every value here can be overridden at runtime through [`SnowfallConfig`].
//!
//! [`SnowfallConfig`]: crate::SnowfallConfig

// Batch
pub const DEFAULT_COUNT: u32 = 10;

// Font size in px: [MIN, MIN + SPAN)
pub const FONT_SIZE_MIN_PX: f64 = 10.0;
pub const FONT_SIZE_SPAN_PX: f64 = 16.0;

// Horizontal placement in vw: [0, 100)
pub const VIEWPORT_SPAN_VW: f64 = 100.0;

// Fall cycle in seconds: [MIN, MIN + SPAN)
pub const DURATION_MIN_S: f64 = 10.0;
pub const DURATION_SPAN_S: f64 = 10.0;

// Start offset in seconds: (-MAX, 0]
pub const DEFAULT_MAX_DELAY_S: f64 = 10.0;

// Repeating mode
pub const DEFAULT_REPEAT_INTERVAL_MS: u32 = 3_000;
