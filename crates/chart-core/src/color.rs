// File: crates/chart-core/src/color.rs
// Summary: CSS color helper (parse, alpha, rgb string) and dataset color values.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Value of a dataset color field: one color, or one color per data point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    List(Vec<String>),
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self { ColorValue::Single(s.to_string()) }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self { ColorValue::Single(s) }
}

impl From<Vec<String>> for ColorValue {
    fn from(v: Vec<String>) -> Self { ColorValue::List(v) }
}

/// A color field as written in the config: `None` is absent, `Some(None)` is an
/// explicit `null`, `Some(Some(_))` is a color. Only absent fields count as unset.
pub type ColorSlot = Option<Option<ColorValue>>;

/// Deserialize a present field (including `null`) as `Some`; pair with
/// `#[serde(default)]` so a missing field stays `None`.
pub(crate) fn present<'de, D>(de: D) -> Result<ColorSlot, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ColorValue>::deserialize(de).map(Some)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}

/// 8-bit RGBA color. Alpha is kept as 0..=255 like the host's color helper,
/// so `rgb_string` prints it rounded to two decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self { Self::new(r, g, b, 255) }

    /// Parse any CSS color (hex, `rgb()`, `hsl()`, `hwb()`, named colors, `transparent`).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let c = csscolorparser::parse(input.trim()).map_err(|e| ColorParseError {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = c.to_rgba8();
        Ok(Self::new(r, g, b, a))
    }

    /// Replace alpha with `alpha` (clamped to 0..=1).
    pub fn alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_nan() { 0 } else { (alpha.clamp(0.0, 1.0) * 255.0).round() as u8 };
        Self { a, ..self }
    }

    pub fn alpha_f64(&self) -> f64 { (self.a as f64 / 255.0 * 100.0).round() / 100.0 }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn rgb_string(&self) -> String {
        if self.a < 255 {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha_f64())
        } else {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }
}
