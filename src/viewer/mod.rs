//! The grid view: one scrollable, selectable view over a cell source.
//!
//! `GridView` handles:
//! - Viewport resizes (page size recomputation and offset clamping)
//! - Scrollbar and wheel gestures
//! - Mouse selection with autoscroll and shift-extend
//! - Activation of drill-into-able cells
//! - Assembling the draw-command list for the visible page
//!
//! Handlers never draw. They update the view's state and queue
//! [`ViewEvent`]s that the host drains with [`GridView::take_events`].

mod events;
mod hit;
mod scroll;
#[cfg(target_arch = "wasm32")]
mod web;

pub use events::{DragState, SelectionState};
pub use hit::{hit_test, HitTarget};
pub use scroll::{resolve_gesture, ScrollGesture};
#[cfg(target_arch = "wasm32")]
pub use web::MatView;

use tracing::debug;

use crate::error::Result;
use crate::layout::{
    compute_page_size, scrollbar_fraction, CellMetrics, PageSize, ScrollState, ScrollbarPosition,
    Viewport,
};
use crate::render::{build_frame, DrawCommand, Palette};
use crate::source::{CellSource, Source, TextMeasure};
use crate::types::{
    Axis, CellPos, DragAnchor, GridStyle, LogicalExtent, PointerEvent, SelectionRect, ViewValue,
};

/// All mutable layout and interaction state of one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub extent: LogicalExtent,
    pub metrics: CellMetrics,
    pub viewport: Viewport,
    pub page: PageSize,
    pub scroll: ScrollState,
    pub selection: SelectionState,
    /// Actionable cell under the pointer
    pub hover: Option<CellPos>,
}

impl ViewState {
    pub fn new(extent: LogicalExtent, metrics: CellMetrics) -> Self {
        Self {
            extent,
            metrics,
            viewport: Viewport::default(),
            page: PageSize::default(),
            scroll: ScrollState::default(),
            selection: SelectionState::default(),
            hover: None,
        }
    }

    pub fn hit(&self, x: i32, y: i32) -> HitTarget {
        hit_test(x, y, &self.metrics, &self.scroll, self.extent)
    }

    pub fn scrollbar(&self, axis: Axis) -> ScrollbarPosition {
        scrollbar_fraction(
            self.scroll.offset(axis),
            self.page.along(axis),
            self.extent.along(axis),
        )
    }
}

/// Notifications queued by the view for its host.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The view's draw list changed
    Redraw,
    /// A scrollbar thumb moved
    Scrollbar {
        axis: Axis,
        position: ScrollbarPosition,
    },
    /// An actionable cell was clicked; the host should open a view over `value`
    Activate { cell: CellPos, value: ViewValue },
}

/// A virtualized grid view over a [`CellSource`].
#[derive(Debug, Clone)]
pub struct GridView<S = Source> {
    source: S,
    style: GridStyle,
    palette: Palette,
    state: ViewState,
    events: Vec<ViewEvent>,
}

impl<S: CellSource> GridView<S> {
    /// Build a view, measuring cell sizes with the host's font metrics.
    ///
    /// # Errors
    /// Fails when the measured metrics are not positive.
    pub fn new(source: S, measure: &dyn TextMeasure) -> Result<Self> {
        Self::with_style(source, measure, GridStyle::default())
    }

    /// # Errors
    /// Also fails when a style color cannot be parsed.
    pub fn with_style(source: S, measure: &dyn TextMeasure, style: GridStyle) -> Result<Self> {
        let metrics = CellMetrics::measure(&source, measure, &style)?;
        Self::build(source, metrics, style)
    }

    /// Build a view with fixed cell metrics.
    ///
    /// # Errors
    /// Returns [`crate::MatviewError::InvalidMetrics`] for zero-sized metrics.
    pub fn with_metrics(source: S, metrics: CellMetrics) -> Result<Self> {
        Self::build(source, metrics, GridStyle::default())
    }

    /// # Errors
    /// See [`GridView::with_metrics`] and [`GridView::with_style`].
    pub fn with_metrics_and_style(source: S, metrics: CellMetrics, style: GridStyle) -> Result<Self> {
        Self::build(source, metrics, style)
    }

    fn build(source: S, metrics: CellMetrics, style: GridStyle) -> Result<Self> {
        let metrics = CellMetrics::new(
            metrics.cell_width,
            metrics.cell_height,
            metrics.row_heading_width,
        )?;
        let palette = Palette::resolve(&style)?;
        let extent = source.extent();
        debug!(?extent, ?metrics, "grid view created");
        Ok(Self {
            source,
            style,
            palette,
            state: ViewState::new(extent, metrics),
            events: Vec::new(),
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn title(&self) -> String {
        self.source.title()
    }

    pub fn extent(&self) -> LogicalExtent {
        self.state.extent
    }

    pub fn metrics(&self) -> CellMetrics {
        self.state.metrics
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page
    }

    pub fn scroll(&self) -> ScrollState {
        self.state.scroll
    }

    pub fn selection(&self) -> Option<SelectionRect> {
        self.state.selection.selection
    }

    pub fn focused_cell(&self) -> Option<CellPos> {
        self.state.selection.focused
    }

    pub fn drag_state(&self) -> DragState {
        self.state.selection.drag_state()
    }

    pub fn scrollbar(&self, axis: Axis) -> ScrollbarPosition {
        self.state.scrollbar(axis)
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain only the queued activations, leaving other notifications queued.
    pub fn take_activations(&mut self) -> Vec<(CellPos, ViewValue)> {
        let mut activations = Vec::new();
        self.events.retain(|event| match event {
            ViewEvent::Activate { cell, value } => {
                activations.push((*cell, value.clone()));
                false
            }
            _ => true,
        });
        activations
    }

    #[cfg(test)]
    pub(crate) fn queue_event(&mut self, event: ViewEvent) {
        self.events.push(event);
    }

    /// Whether a redraw is pending in the event queue.
    pub fn needs_render(&self) -> bool {
        self.events.contains(&ViewEvent::Redraw)
    }

    fn request_redraw(&mut self) {
        if !self.needs_render() {
            self.events.push(ViewEvent::Redraw);
        }
    }

    fn report_scrollbar(&mut self, axis: Axis) {
        let position = self.state.scrollbar(axis);
        self.events
            .retain(|e| !matches!(e, ViewEvent::Scrollbar { axis: a, .. } if *a == axis));
        self.events.push(ViewEvent::Scrollbar { axis, position });
    }

    /// Viewport size changed.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let state = &mut self.state;
        state.viewport.resize(width, height);
        state.page = compute_page_size(&state.viewport, &state.metrics, state.extent);
        state.scroll.clamp(state.extent, state.page);
        debug!(width, height, page = ?state.page, scroll = ?state.scroll, "resize");
        self.report_scrollbar(Axis::Horizontal);
        self.report_scrollbar(Axis::Vertical);
        self.request_redraw();
    }

    /// Scrollbar gesture. Returns true if the offset changed.
    pub fn on_scroll(&mut self, axis: Axis, gesture: ScrollGesture) -> bool {
        if !scroll::scroll_axis(&mut self.state, axis, gesture) {
            return false;
        }
        self.report_scrollbar(axis);
        self.request_redraw();
        true
    }

    /// Mouse wheel. Returns true if an offset changed.
    pub fn on_wheel(&mut self, event: &PointerEvent) -> bool {
        let Some(axis) = scroll::wheel(&mut self.state, event, self.style.wheel_step) else {
            return false;
        };
        self.report_scrollbar(axis);
        self.request_redraw();
        true
    }

    /// Primary button pressed.
    pub fn on_pointer_press(&mut self, event: &PointerEvent) -> bool {
        let changed = events::press(&mut self.state, event);
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Pointer moved. Only has an effect while dragging.
    pub fn on_pointer_drag(&mut self, event: &PointerEvent) -> bool {
        let scroll_before = self.state.scroll;
        let changed = events::drag(&mut self.state, event, self.style.autoscroll_delay_ms);
        if self.state.scroll.column_offset != scroll_before.column_offset {
            self.report_scrollbar(Axis::Horizontal);
        }
        if self.state.scroll.row_offset != scroll_before.row_offset {
            self.report_scrollbar(Axis::Vertical);
        }
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Pointer moved, with or without a button down. Tracks which
    /// actionable cell is hovered. Returns true if the hover changed.
    pub fn on_pointer_motion(&mut self, event: &PointerEvent) -> bool {
        let hover = match self.state.hit(event.x, event.y) {
            HitTarget::Cell(cell) if self.source.cell_is_actionable(cell.column, cell.row) => {
                Some(cell)
            }
            _ => None,
        };
        self.set_hover(hover)
    }

    /// Pointer left the view.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.set_hover(None)
    }

    fn set_hover(&mut self, hover: Option<CellPos>) -> bool {
        if self.state.hover == hover {
            return false;
        }
        self.state.hover = hover;
        self.request_redraw();
        true
    }

    pub fn hovered_cell(&self) -> Option<CellPos> {
        self.state.hover
    }

    /// Primary button released.
    ///
    /// Completing a cell drag over an actionable cell that is the whole
    /// selection queues [`ViewEvent::Activate`]. Row, column and corner
    /// selections never activate, even when they cover a single cell.
    pub fn on_pointer_release(&mut self, event: &PointerEvent) {
        let completed = events::release(&mut self.state);

        let HitTarget::Cell(cell) = self.state.hit(event.x, event.y) else {
            return;
        };
        if completed != Some(DragAnchor::Cell(cell)) {
            return;
        }
        if self.state.selection.selection != Some(SelectionRect::cell(cell)) {
            return;
        }
        if !self.source.cell_is_actionable(cell.column, cell.row) {
            return;
        }
        if let Some(value) = self.source.cell_value(cell.column, cell.row) {
            debug!(?cell, "activate");
            self.events.push(ViewEvent::Activate { cell, value });
        }
    }

    /// Draw commands for the visible page.
    pub fn render(&self) -> Vec<DrawCommand> {
        build_frame(&self.source, &self.state, &self.style, &self.palette)
    }
}
