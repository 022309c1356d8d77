//! Snowflake parameters.
//!
//! A [`Snowflake`] is the set of numbers the stylesheet's fall animation
//! consumes. The element itself is built by whatever [`FlakeMount`] receives it.
//!
//! [`FlakeMount`]: crate::FlakeMount

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SnowfallConfig;
use crate::constants::VIEWPORT_SPAN_VW;

/// Class the stylesheet keys its animation on.
pub const CSS_CLASS: &str = "snowflake";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// U+2744 SNOWFLAKE
    #[serde(rename = "❄")]
    Snowflake,
    /// U+2745 TIGHT TRIFOLIATE SNOWFLAKE
    #[serde(rename = "❅")]
    TightTrifoliate,
    /// U+2746 HEAVY CHEVRON SNOWFLAKE
    #[serde(rename = "❆")]
    HeavyChevron,
}

impl Glyph {
    pub const ALL: [Glyph; 3] = [
        Glyph::Snowflake,
        Glyph::TightTrifoliate,
        Glyph::HeavyChevron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Snowflake => "❄",
            Glyph::TightTrifoliate => "❅",
            Glyph::HeavyChevron => "❆",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snowflake {
    pub glyph: Glyph,
    pub font_size_px: f64,
    /// Horizontal offset as a percentage of viewport width.
    pub left_vw: f64,
    pub duration_s: f64,
    /// Always <= 0 so the flake starts partway through its fall.
    pub delay_s: f64,
}

impl Snowflake {
    /// Draw a flake. Each attribute takes its own uniform sample in `[0, 1)`,
    /// in the order glyph, size, left, duration, delay.
    ///
    /// `config.glyphs` must be non-empty; only a validated config reaches here.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R, config: &SnowfallConfig) -> Self {
        let glyphs = &config.glyphs;
        // floor(r * len); the min guards against r rounding up to 1.0 in the product
        let index = ((rng.gen::<f64>() * glyphs.len() as f64) as usize).min(glyphs.len() - 1);

        Self {
            glyph: glyphs[index],
            font_size_px: config.font_size.sample(rng.gen()),
            left_vw: rng.gen::<f64>() * VIEWPORT_SPAN_VW,
            duration_s: config.duration.sample(rng.gen()),
            delay_s: -(rng.gen::<f64>() * config.max_delay),
        }
    }

    /// The four inline style declarations as `(property, value)` pairs.
    pub fn style_properties(&self) -> [(&'static str, String); 4] {
        [
            ("font-size", format!("{}px", self.font_size_px)),
            ("left", format!("{}vw", self.left_vw)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }

    /// Value for an element's `style` attribute.
    pub fn inline_style(&self) -> String {
        self.style_properties()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
