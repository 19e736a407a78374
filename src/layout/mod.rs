//! Layout engine: page sizes, scroll offsets and the viewport.
//!
//! This module handles:
//! - Computing how many whole cells fit in the viewport
//! - Clamping scroll offsets whenever the page size changes
//! - Converting offsets into scrollbar thumb fractions

mod geometry;
mod viewport;

pub use geometry::{
    clamp_offset, compute_page_size, max_offset, scrollbar_fraction, visible_range, CellMetrics,
    PageSize, ScrollbarPosition,
};
pub use viewport::{ScrollState, Viewport};
