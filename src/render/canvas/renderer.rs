//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using HTML Canvas 2D API via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::Result;
use crate::render::backend::RenderBackend;
use crate::render::commands::{DrawCommand, TextKind};
use crate::source::{TextAlign, TextMeasure};

const FONT_FAMILY: &str = "monospace";
const DEFAULT_FONT_SIZE: u32 = 12;

#[derive(Debug)]
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f32,
    font_size: u32,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
            font_size: DEFAULT_FONT_SIZE,
        })
    }

    fn font(&self, kind: TextKind) -> String {
        match kind {
            TextKind::Heading => format!("bold {}px {FONT_FAMILY}", self.font_size),
            TextKind::Cell => format!("{}px {FONT_FAMILY}", self.font_size),
            TextKind::ActionableCell => format!("italic {}px {FONT_FAMILY}", self.font_size),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn measure_in(&self, kind: TextKind, text: &str) -> u32 {
        self.ctx.set_font(&self.font(kind));
        self.ctx
            .measure_text(text)
            .map(|m| m.width().ceil().max(0.0) as u32)
            .unwrap_or(0)
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }

    fn fill_rect(&self, x: i32, y: i32, w: i32, h: i32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
    }

    fn stroke_line(&self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(f64::from(width));
        if width == 1 {
            self.ctx.move_to(Self::crisp(f64::from(x0)), Self::crisp(f64::from(y0)));
            self.ctx.line_to(Self::crisp(f64::from(x1)), Self::crisp(f64::from(y1)));
        } else {
            self.ctx.move_to(f64::from(x0), f64::from(y0));
            self.ctx.line_to(f64::from(x1), f64::from(y1));
        }
        self.ctx.stroke();
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_text(
        &self,
        x: i32,
        y: i32,
        max_width: i32,
        text: &str,
        align: TextAlign,
        kind: TextKind,
        color: &str,
    ) -> Result<()> {
        if text.is_empty() || max_width <= 0 {
            return Ok(());
        }
        self.ctx.set_font(&self.font(kind));
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text_with_max_width(text, f64::from(x), f64::from(y), f64::from(max_width))
            .map_err(|_| crate::error::MatviewError::Render("fillText failed".to_string()))
    }
}

impl TextMeasure for CanvasRenderer {
    fn text_width(&self, text: &str) -> u32 {
        self.measure_in(TextKind::Cell, text)
    }

    /// Headings are drawn bold, so they are measured bold too.
    fn heading_text_width(&self, text: &str) -> u32 {
        self.measure_in(TextKind::Heading, text)
    }

    fn font_size(&self) -> u32 {
        self.font_size
    }
}

impl RenderBackend for CanvasRenderer {
    fn init(&mut self) -> Result<()> {
        // Canvas 2D doesn't need explicit initialization
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;

        // Canvas buffer in physical pixels, drawing in logical pixels
        let scale = f64::from(dpr);
        self.canvas
            .set_width((f64::from(width) * scale).round().max(0.0) as u32);
        self.canvas
            .set_height((f64::from(height) * scale).round().max(0.0) as u32);
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn render(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            match command {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => self.fill_rect(*x, *y, *width, *height, color),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    width,
                    color,
                } => self.stroke_line(*x0, *y0, *x1, *y1, *width, color),
                DrawCommand::Text {
                    x,
                    y,
                    max_width,
                    text,
                    align,
                    kind,
                    color,
                } => self.fill_text(*x, *y, *max_width, text, *align, *kind, color)?,
            }
        }
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
