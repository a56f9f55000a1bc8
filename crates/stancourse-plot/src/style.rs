//! Passthrough drawing attributes
//!
//! A [`Style`] carries the attributes a caller wants forwarded to the shape
//! primitive. Attributes can be set through typed builders or from
//! matplotlib-style keyword pairs (`"color"`, `"lw"`, `"alpha"`, ...), which
//! is how notebook code usually spells them.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{StyleError, StyleResult};

/// Stroke pattern for outlines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// No outline
    None,
}

impl LineStyle {
    /// Parse long names and the matplotlib shorthands
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "-" | "solid" => Some(LineStyle::Solid),
            "--" | "dashed" => Some(LineStyle::Dashed),
            ":" | "dotted" => Some(LineStyle::Dotted),
            "-." | "dashdot" => Some(LineStyle::DashDot),
            "" | " " | "none" | "None" => Some(LineStyle::None),
            _ => None,
        }
    }
}

/// Drawing attributes forwarded verbatim to a surface
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Sets both face and edge color unless those are given
    pub color: Option<Color>,
    pub face_color: Option<Color>,
    pub edge_color: Option<Color>,
    /// Overall opacity, multiplies the color alpha
    pub alpha: Option<f32>,
    pub line_width: Option<f32>,
    pub line_style: Option<LineStyle>,
    /// Whether closed patches are filled
    pub fill: Option<bool>,
    /// Legend label
    pub label: Option<String>,
    pub z_order: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn face_color(mut self, color: impl Into<Color>) -> Self {
        self.face_color = Some(color.into());
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = Some(color.into());
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn z_order(mut self, z: f32) -> Self {
        self.z_order = Some(z);
        self
    }

    /// Build a style from keyword pairs, failing on the first bad one
    pub fn from_pairs<I, K, V>(pairs: I) -> StyleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut style = Self::default();
        for (key, value) in pairs {
            style.set(key.as_ref(), value.as_ref())?;
        }
        Ok(style)
    }

    /// Set one attribute by its keyword name
    pub fn set(&mut self, name: &str, value: &str) -> StyleResult<()> {
        let invalid = || StyleError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "color" | "c" => self.color = Some(value.parse().map_err(|_| invalid())?),
            "facecolor" | "fc" => self.face_color = Some(value.parse().map_err(|_| invalid())?),
            "edgecolor" | "ec" => self.edge_color = Some(value.parse().map_err(|_| invalid())?),
            "alpha" => {
                let alpha: f32 = value.trim().parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(invalid());
                }
                self.alpha = Some(alpha);
            }
            "linewidth" | "lw" => {
                let width: f32 = value.trim().parse().map_err(|_| invalid())?;
                if !width.is_finite() || width < 0.0 {
                    return Err(invalid());
                }
                self.line_width = Some(width);
            }
            "linestyle" | "ls" => self.line_style = Some(LineStyle::parse(value).ok_or_else(invalid)?),
            "fill" => {
                self.fill = Some(match value.trim() {
                    "true" | "True" | "1" => true,
                    "false" | "False" | "0" => false,
                    _ => return Err(invalid()),
                })
            }
            "label" => self.label = Some(value.to_string()),
            "zorder" => self.z_order = Some(value.trim().parse().map_err(|_| invalid())?),
            _ => {
                return Err(StyleError::UnknownAttribute {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Fill color after applying `color`, `face_color` and `alpha`
    pub fn resolved_face_color(&self, default: Color) -> Color {
        let base = self.face_color.or(self.color).unwrap_or(default);
        self.apply_alpha(base)
    }

    /// Outline color after applying `color`, `edge_color` and `alpha`
    pub fn resolved_edge_color(&self, default: Color) -> Color {
        let base = self.edge_color.or(self.color).unwrap_or(default);
        self.apply_alpha(base)
    }

    fn apply_alpha(&self, color: Color) -> Color {
        match self.alpha {
            Some(alpha) => color.with_alpha(alpha),
            None => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BL1, BL2};

    #[test]
    fn test_builder() {
        let style = Style::new().color(BL2).alpha(0.5).label("posterior");
        assert_eq!(style.color, Some(BL2));
        assert_eq!(style.alpha, Some(0.5));
        assert_eq!(style.label.as_deref(), Some("posterior"));
    }

    #[test]
    fn test_from_pairs_aliases() {
        let style = Style::from_pairs([("c", "red"), ("lw", "2"), ("ls", "--"), ("ec", "k")]).unwrap();
        assert_eq!(style.color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(style.line_width, Some(2.0));
        assert_eq!(style.line_style, Some(LineStyle::Dashed));
        assert_eq!(style.edge_color, Some(Color::rgb(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_unknown_attribute() {
        let err = Style::from_pairs([("colour", "red")]).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownAttribute {
                name: "colour".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut style = Style::new();
        assert!(style.set("alpha", "1.5").is_err());
        assert!(style.set("alpha", "opaque").is_err());
        assert!(style.set("lw", "-1").is_err());
        assert!(style.set("ls", "~~").is_err());
        assert!(style.set("fill", "maybe").is_err());
        assert!(style.set("color", "not-a-color").is_err());
        assert_eq!(style, Style::new());
    }

    #[test]
    fn test_resolved_colors() {
        let style = Style::new().color(BL2).edge_color(BL1).alpha(0.25);
        assert_eq!(style.resolved_face_color(BL1), BL2.with_alpha(0.25));
        assert_eq!(style.resolved_edge_color(BL2), BL1.with_alpha(0.25));
        assert_eq!(Style::new().resolved_face_color(BL1), BL1);
    }
}
