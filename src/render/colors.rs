//! Color parsing and the resolved grid palette.
//!
//! Styles carry colors as user-supplied strings; they are normalized once
//! when a view is built so every draw command holds a valid CSS color.

use crate::error::{MatviewError, Result};
use crate::types::GridStyle;

/// A CSS color string (e.g., "#FF0000", "rgb(255, 0, 0)")
pub type CssColor = String;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or the short `#RGB` form (with or without `#`).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => Some(Self {
                r: u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
                g: u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
                b: u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
            }),
            3 => {
                let nibble = |i: usize| -> Option<u8> {
                    let v = u8::from_str_radix(hex.get(i..=i)?, 16).ok()?;
                    Some(v * 17)
                };
                Some(Self {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                })
            }
            _ => None,
        }
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Normalize a color to a CSS string.
///
/// Supported formats:
/// - "#RRGGBB" and "#RGB"
/// - "RRGGBB" (hex without # prefix)
/// - "rgb(r, g, b)" / "rgba(r, g, b, a)" (passed through)
/// - a few basic names ("white", "black", "red", "green", "blue", "gray")
pub fn parse_color(s: &str) -> Option<CssColor> {
    let s = s.trim();
    if s.starts_with("rgb") {
        return (s.ends_with(')') && s.contains('(')).then(|| s.to_string());
    }
    if let Some(rgb) = Rgb::from_hex(s) {
        return Some(rgb.to_hex());
    }
    let named = match s.to_ascii_lowercase().as_str() {
        "white" => Rgb::new(255, 255, 255),
        "black" => Rgb::new(0, 0, 0),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "blue" => Rgb::new(0, 0, 255),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        _ => return None,
    };
    Some(named.to_hex())
}

/// Colors of a [`GridStyle`], validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: CssColor,
    pub heading: CssColor,
    pub cell_outline: CssColor,
    pub text: CssColor,
    pub actionable_text: CssColor,
    pub actionable_hover: CssColor,
    pub selection: CssColor,
    pub selection_heading: CssColor,
    pub selection_border: CssColor,
}

impl Palette {
    /// # Errors
    /// Returns [`MatviewError::InvalidColor`] naming the first unparseable color.
    pub fn resolve(style: &GridStyle) -> Result<Self> {
        let pick = |name: &str, value: &str| {
            parse_color(value).ok_or_else(|| MatviewError::InvalidColor {
                name: name.to_string(),
                value: value.to_string(),
            })
        };
        Ok(Self {
            background: pick("background", &style.background_color)?,
            heading: pick("heading", &style.heading_color)?,
            cell_outline: pick("cell_outline", &style.cell_outline_color)?,
            text: pick("text", &style.text_color)?,
            actionable_text: pick("actionable_text", &style.actionable_text_color)?,
            actionable_hover: pick("actionable_hover", &style.actionable_hover_color)?,
            selection: pick("selection", &style.selection_color)?,
            selection_heading: pick("selection_heading", &style.selection_heading_color)?,
            selection_border: pick("selection_border", &style.selection_border_color)?,
        })
    }
}
