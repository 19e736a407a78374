//! Selection state machine: press, drag, release and shift-extend.
//!
//! All functions here take the view's [`ViewState`] aggregate and report
//! whether anything visible changed, so the caller decides on redraws.

use tracing::debug;

use super::hit::{axis_index, hit_test, HitTarget};
use super::scroll::{scroll_axis, ScrollGesture};
use super::ViewState;
use crate::types::{Axis, CellPos, DragAnchor, PointerEvent, SelectionRect};

/// Whether a drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Selection, focus and drag bookkeeping of one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selection: Option<SelectionRect>,
    pub focused: Option<CellPos>,
    /// Anchor of the drag in progress
    pub anchor: Option<DragAnchor>,
    /// Drag-start anchor of the most recently completed drag, reused by shift-extend
    pub last_anchor: Option<DragAnchor>,
    /// A plain press opened a gesture that the next release completes
    pub button_down: bool,
    pub last_autoscroll_ms: Option<f64>,
}

impl SelectionState {
    pub fn drag_state(&self) -> DragState {
        if self.anchor.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    fn clear(&mut self) {
        self.selection = None;
        self.focused = None;
    }

    fn visible(&self) -> (Option<SelectionRect>, Option<CellPos>) {
        (self.selection, self.focused)
    }
}

fn clamp_index(index: i64, count: u32) -> u32 {
    let max = count.saturating_sub(1);
    u32::try_from(index.clamp(0, i64::from(max))).unwrap_or(max)
}

/// Recompute selection and focus from an anchor and the live pointer.
fn track_pointer(state: &mut ViewState, anchor: DragAnchor, x: i32, y: i32) {
    let extent = state.extent;
    if extent.is_empty() {
        return;
    }
    let m = state.metrics;
    let column = clamp_index(
        axis_index(x, m.row_heading_width, m.cell_width, state.scroll.column_offset),
        extent.columns,
    );
    let row = clamp_index(
        axis_index(y, m.cell_height, m.cell_height, state.scroll.row_offset),
        extent.rows,
    );
    let last_column = extent.columns - 1;
    let last_row = extent.rows - 1;

    let (focus, opposite) = match anchor {
        DragAnchor::Column(c) => (CellPos::new(column, 0), CellPos::new(c.min(last_column), last_row)),
        DragAnchor::Row(r) => (CellPos::new(0, row), CellPos::new(last_column, r.min(last_row))),
        DragAnchor::Cell(a) => (
            CellPos::new(column, row),
            CellPos::new(a.column.min(last_column), a.row.min(last_row)),
        ),
    };
    state.selection.focused = Some(focus);
    state.selection.selection = Some(SelectionRect::spanning(focus, opposite));
}

/// Handle a button press.
pub(crate) fn press(state: &mut ViewState, event: &PointerEvent) -> bool {
    let before = state.selection.visible();

    if event.modifiers.extends_range() && state.selection.selection.is_some() {
        if let Some(anchor) = state.selection.last_anchor {
            track_pointer(state, anchor, event.x, event.y);
        }
        return before != state.selection.visible();
    }

    let extent = state.extent;
    let sel = &mut state.selection;
    sel.button_down = true;
    sel.anchor = None;
    match hit_test(event.x, event.y, &state.metrics, &state.scroll, extent) {
        HitTarget::None => sel.clear(),
        HitTarget::Corner => {
            sel.selection = Some(SelectionRect::all(extent));
            sel.focused = None;
        }
        HitTarget::RowHeading(_) if extent.columns == 0 => sel.clear(),
        HitTarget::RowHeading(row) => {
            sel.selection = Some(SelectionRect::row(row, extent));
            sel.focused = Some(CellPos::new(0, row));
            sel.anchor = Some(DragAnchor::Row(row));
        }
        HitTarget::ColumnHeading(_) if extent.rows == 0 => sel.clear(),
        HitTarget::ColumnHeading(column) => {
            sel.selection = Some(SelectionRect::column(column, extent));
            sel.focused = Some(CellPos::new(column, 0));
            sel.anchor = Some(DragAnchor::Column(column));
        }
        HitTarget::Cell(cell) => {
            sel.selection = Some(SelectionRect::cell(cell));
            sel.focused = Some(cell);
            sel.anchor = Some(DragAnchor::Cell(cell));
        }
    }
    debug!(selection = ?sel.selection, anchor = ?sel.anchor, "press");
    before != state.selection.visible()
}

/// Which autoscroll steps the pointer position asks for.
fn autoscroll_steps(state: &ViewState, anchor: DragAnchor, x: i32, y: i32) -> [(Axis, i64); 2] {
    let m = &state.metrics;
    let step = |pos: i32, origin: u32, cell: u32, page: u32| -> i64 {
        let pos = i64::from(pos);
        let start = i64::from(origin);
        let end = start + i64::from(cell) * i64::from(page);
        if pos < start {
            -1
        } else if pos > end {
            1
        } else {
            0
        }
    };
    let horizontal = if anchor.scrolls_columns() {
        step(x, m.row_heading_width, m.cell_width, state.page.columns)
    } else {
        0
    };
    let vertical = if anchor.scrolls_rows() {
        step(y, m.cell_height, m.cell_height, state.page.rows)
    } else {
        0
    };
    [(Axis::Horizontal, horizontal), (Axis::Vertical, vertical)]
}

/// Handle pointer motion. Ignored unless a drag is in progress.
pub(crate) fn drag(state: &mut ViewState, event: &PointerEvent, autoscroll_delay_ms: f64) -> bool {
    let Some(anchor) = state.selection.anchor else {
        return false;
    };
    let before = (state.selection.visible(), state.scroll);

    let due = state
        .selection
        .last_autoscroll_ms
        .map_or(true, |last| event.time_ms - last >= autoscroll_delay_ms);
    if due {
        let mut stepped = false;
        for (axis, units) in autoscroll_steps(state, anchor, event.x, event.y) {
            if units != 0 {
                scroll_axis(state, axis, ScrollGesture::Units(units));
                stepped = true;
            }
        }
        if stepped {
            state.selection.last_autoscroll_ms = Some(event.time_ms);
        }
    }

    track_pointer(state, anchor, event.x, event.y);
    before != (state.selection.visible(), state.scroll)
}

/// Handle a button release: the active anchor becomes the one shift-extend reuses.
///
/// Returns the anchor of the drag this release completed, if any.
pub(crate) fn release(state: &mut ViewState) -> Option<DragAnchor> {
    let sel = &mut state.selection;
    let completed = sel.anchor.take();
    if sel.button_down {
        sel.last_anchor = completed;
        sel.button_down = false;
    }
    completed
}
