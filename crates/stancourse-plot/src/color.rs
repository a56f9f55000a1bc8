//! Colors for plot styling
//!
//! Colors are RGBA with components in 0.0..=1.0. They can be parsed from
//! hex strings (`#RRGGBB`, `#RRGGBBAA`), a handful of named colors, or
//! built from RGB tuples. The course palette (`BL1`..`BL3`) is a ramp of
//! blues used for nested confidence ellipses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Pure blue
pub const BL1: Color = Color::rgb(0.0, 0.0, 1.0);
/// Medium blue
pub const BL2: Color = Color::rgb(0.5, 0.5, 1.0);
/// Pale blue
pub const BL3: Color = Color::rgb(0.8, 0.8, 1.0);

impl Color {
    /// Create a new color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB (alpha = 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Create a color from hex string (e.g., "#FF5733", "FF5733", "#FF573380")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let channel = |i: usize| -> Option<f32> {
            Some(u8::from_str_radix(&hex[i..i + 2], 16).ok()? as f32 / 255.0)
        };

        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Look up a named color
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" | "k" => Self::rgb(0.0, 0.0, 0.0),
            "white" | "w" => Self::rgb(1.0, 1.0, 1.0),
            "red" | "r" => Self::rgb(1.0, 0.0, 0.0),
            "green" | "g" => Self::rgb(0.0, 0.5, 0.0),
            "blue" | "b" => Self::rgb(0.0, 0.0, 1.0),
            "cyan" | "c" => Self::rgb(0.0, 0.75, 0.75),
            "magenta" | "m" => Self::rgb(0.75, 0.0, 0.75),
            "yellow" | "y" => Self::rgb(0.75, 0.75, 0.0),
            "gray" | "grey" => Self::rgb(0.5, 0.5, 0.5),
            "orange" => Self::rgb(1.0, 0.647, 0.0),
            "purple" => Self::rgb(0.5, 0.0, 0.5),
            "bl1" => BL1,
            "bl2" => BL2,
            "bl3" => BL3,
            "none" | "transparent" => Self::new(0.0, 0.0, 0.0, 0.0),
            _ => return None,
        };
        Some(color)
    }

    /// Convert to hex string (alpha dropped)
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// CSS `rgba(...)` form, as understood by HTML/SVG backends
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Convert to array [r, g, b, a]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Error for strings that name no color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognised color '{0}'")]
pub struct ParseColorError(pub String);

impl Default for Color {
    fn default() -> Self {
        BL1
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a hex string, a named color, or an `(r, g, b)` triple
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseColorError(s.to_string());

        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed).ok_or_else(err);
        }
        if let Some(inner) = trimmed.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            let parts: Vec<f32> = inner
                .split(',')
                .map(|p| p.trim().parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|_| err())?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
                _ => Err(err()),
            };
        }
        Self::from_name(trimmed).ok_or_else(err)
    }
}
