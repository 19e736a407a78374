//! Toolkit-neutral draw commands.
//!
//! A frame is a plain `Vec<DrawCommand>` in painter's order. Backends replay
//! it; tests inspect it.

use serde::Serialize;

use super::colors::CssColor;
use crate::source::TextAlign;

/// What a text command shows, so backends can pick fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Heading,
    Cell,
    /// Cell that opens a nested view when clicked
    ActionableCell,
}

/// One drawing operation in logical (CSS) pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: CssColor,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
        color: CssColor,
    },
    /// Text anchored at `(x, y)`: `x` is the left edge, center or right edge
    /// depending on `align`, `y` is the vertical middle of the line.
    Text {
        x: i32,
        y: i32,
        max_width: i32,
        text: String,
        align: TextAlign,
        kind: TextKind,
        color: CssColor,
    },
}

impl DrawCommand {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Self::FillRect { color, .. } | Self::Line { color, .. } | Self::Text { color, .. } => {
                color
            }
        }
    }
}
