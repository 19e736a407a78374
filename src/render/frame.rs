//! Frame assembly: the draw-command list for one view's visible page.
//!
//! Only the visible window is emitted: the page plus one partially visible
//! trailing cell per axis, capped at the extent. Cost is proportional to the
//! page, never to the extent.

use super::colors::Palette;
use super::commands::{DrawCommand, TextKind};
use super::selection::{cell_rect, edge, selection_overlay, to_px, PixelRect};
use crate::layout::visible_range;
use crate::source::{CellSource, TextAlign};
use crate::types::{CellPos, GridStyle};
use crate::viewer::ViewState;

fn fill(rect: PixelRect, color: &str) -> DrawCommand {
    DrawCommand::FillRect {
        x: rect.x,
        y: rect.y,
        width: rect.w,
        height: rect.h,
        color: color.to_string(),
    }
}

fn line(x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: &str) -> DrawCommand {
    DrawCommand::Line {
        x0,
        y0,
        x1,
        y1,
        width,
        color: color.to_string(),
    }
}

/// Text command laid out inside `rect` with horizontal padding.
fn label(
    rect: PixelRect,
    text: String,
    align: TextAlign,
    kind: TextKind,
    color: &str,
    hpad: i32,
) -> DrawCommand {
    let x = match align {
        TextAlign::Left => rect.x.saturating_add(hpad),
        TextAlign::Center => rect.x.saturating_add(rect.w / 2),
        TextAlign::Right => rect.right().saturating_sub(hpad),
    };
    DrawCommand::Text {
        x,
        y: rect.y.saturating_add(rect.h / 2),
        max_width: rect.w.saturating_sub(hpad.saturating_mul(2)).max(0),
        text,
        align,
        kind,
        color: color.to_string(),
    }
}

/// Build the draw list for the current state of a view.
///
/// Painter's order: background and heading bands, selection fills, focused
/// cell, grid lines, heading labels, cell texts, selection border.
pub fn build_frame<S: CellSource + ?Sized>(
    source: &S,
    state: &ViewState,
    style: &GridStyle,
    palette: &Palette,
) -> Vec<DrawCommand> {
    let m = &state.metrics;
    let scroll = &state.scroll;
    let extent = state.extent;
    let vw = to_px(i64::from(state.viewport.width));
    let vh = to_px(i64::from(state.viewport.height));
    let rhw = to_px(i64::from(m.row_heading_width));
    let ch = to_px(i64::from(m.cell_height));
    let hpad = to_px(i64::from(style.cell_hpadding));

    let cols = visible_range(scroll.column_offset, state.page.columns, extent.columns);
    let rows = visible_range(scroll.row_offset, state.page.rows, extent.rows);
    let data_right = edge(m.row_heading_width, m.cell_width, scroll.column_offset, cols.end);
    let data_bottom = edge(m.cell_height, m.cell_height, scroll.row_offset, rows.end);

    let mut out = Vec::with_capacity(cols.len() * rows.len() + cols.len() + rows.len() + 16);

    // Background and heading bands
    out.push(fill(PixelRect { x: 0, y: 0, w: vw, h: vh }, &palette.background));
    out.push(fill(PixelRect { x: 0, y: 0, w: vw, h: ch }, &palette.heading));
    out.push(fill(PixelRect { x: 0, y: 0, w: rhw, h: vh }, &palette.heading));

    // Selection fills
    let overlay = state.selection.selection.and_then(|sel| {
        selection_overlay(sel, m, scroll, state.page, extent)
    });
    if let Some(o) = &overlay {
        out.push(fill(o.column_strip, &palette.selection_heading));
        out.push(fill(o.row_strip, &palette.selection_heading));
        out.push(fill(o.body, &palette.selection));
    }

    // Focused cell
    if let Some(focus) = state.selection.focused {
        if cols.contains(&focus.column) && rows.contains(&focus.row) {
            out.push(fill(cell_rect(focus, m, scroll), &palette.background));
        }
    }

    // Grid lines
    for column in cols.start..=cols.end {
        let x = edge(m.row_heading_width, m.cell_width, scroll.column_offset, column);
        out.push(line(x, 0, x, data_bottom, 1, &palette.cell_outline));
    }
    for row in rows.start..=rows.end {
        let y = edge(m.cell_height, m.cell_height, scroll.row_offset, row);
        out.push(line(0, y, data_right, y, 1, &palette.cell_outline));
    }

    // Heading labels
    out.push(label(
        PixelRect { x: 0, y: 0, w: rhw, h: ch },
        source.corner_label().to_string(),
        TextAlign::Center,
        TextKind::Heading,
        &palette.text,
        hpad,
    ));
    for column in cols.clone() {
        let rect = cell_rect(CellPos::new(column, 0), m, scroll);
        out.push(label(
            PixelRect { y: 0, ..rect },
            source.column_heading_label(column),
            TextAlign::Center,
            TextKind::Heading,
            &palette.text,
            hpad,
        ));
    }
    let align = source.text_align();
    for row in rows.clone() {
        let rect = cell_rect(CellPos::new(0, row), m, scroll);
        out.push(label(
            PixelRect { x: 0, w: rhw, ..rect },
            source.row_heading_label(row),
            align,
            TextKind::Heading,
            &palette.text,
            hpad,
        ));
    }

    // Cell texts
    for row in rows.clone() {
        for column in cols.clone() {
            let (kind, color) = if source.cell_is_actionable(column, row) {
                let color = if state.hover == Some(CellPos::new(column, row)) {
                    &palette.actionable_hover
                } else {
                    &palette.actionable_text
                };
                (TextKind::ActionableCell, color)
            } else {
                (TextKind::Cell, &palette.text)
            };
            out.push(label(
                cell_rect(CellPos::new(column, row), m, scroll),
                source.cell_text(column, row),
                align,
                kind,
                color,
                hpad,
            ));
        }
    }

    // Selection border
    if let Some(o) = overlay {
        let width = style.selection_border_width;
        let color = &palette.selection_border;
        let b = o.body;
        if o.draw_top {
            out.push(line(b.x, b.y, b.right(), b.y, width, color));
        }
        if o.draw_bottom {
            out.push(line(b.x, b.bottom(), b.right(), b.bottom(), width, color));
        }
        if o.draw_left {
            out.push(line(b.x, b.y, b.x, b.bottom(), width, color));
        }
        if o.draw_right {
            out.push(line(b.right(), b.y, b.right(), b.bottom(), width, color));
        }
    }

    out
}
