//! Color parsing

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*([\d.]+)\s*,\s*([\d.]+)\s*,\s*([\d.]+)\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .unwrap()
});

/// An RGBA color with every channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl ColorValue {
    /// Create an opaque color from normalized channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from normalized channels and alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#`-prefixed hex color or an `rgba(...)` expression.
    ///
    /// Returns `None` for anything else, including malformed hex digits.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            Self::from_hex(hex)
        } else if input.starts_with("rgba") {
            Self::from_rgba(input)
        } else {
            None
        }
    }

    /// Parse hex digits (without `#`): `rgb`, `rgba`, `rrggbb` or `rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| -> Option<f64> {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0)
        };

        let alpha = if expanded.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    fn from_rgba(input: &str) -> Option<Self> {
        let caps = RGBA_PATTERN.captures(input)?;
        let channel = |i: usize| -> Option<f64> {
            let v: f64 = caps.get(i)?.as_str().parse().ok()?;
            Some((v / 255.0).clamp(0.0, 1.0))
        };
        let alpha = match caps.get(4) {
            Some(m) => m.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0),
            None => 1.0,
        };
        Some(Self::rgba(channel(1)?, channel(2)?, channel(3)?, alpha))
    }
}
