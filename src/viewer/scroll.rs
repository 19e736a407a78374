//! Scroll controller: turns scroll gestures into clamped offsets.

use tracing::debug;

use super::ViewState;
use crate::layout::clamp_offset;
use crate::types::{Axis, PointerEvent};

/// A scrollbar or wheel gesture along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollGesture {
    /// Move by `n` cells
    Units(i64),
    /// Move by `n` pages
    Pages(i64),
    /// Jump to a fraction of the total extent (thumb drag)
    MoveTo(f64),
}

impl ScrollGesture {
    /// Parse a scrollbar command in the `scroll n units|pages` / `moveto f` vocabulary.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_command(kind: &str, amount: f64) -> Option<Self> {
        match kind {
            "units" if amount.is_finite() => Some(Self::Units(amount.trunc() as i64)),
            "pages" if amount.is_finite() => Some(Self::Pages(amount.trunc() as i64)),
            "moveto" => Some(Self::MoveTo(amount)),
            _ => None,
        }
    }
}

/// Offset a gesture leads to, clamped to `[0, extent - page]`.
///
/// Fractions are scaled by the total extent (not the maximum offset) and
/// rounded half up, matching thumb-drag semantics.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_gesture(offset: u32, gesture: ScrollGesture, page: u32, extent: u32) -> u32 {
    let candidate = match gesture {
        ScrollGesture::Units(n) => i64::from(offset).saturating_add(n),
        ScrollGesture::Pages(n) => {
            i64::from(offset).saturating_add(n.saturating_mul(i64::from(page)))
        }
        ScrollGesture::MoveTo(f) if f.is_finite() => (f * f64::from(extent) + 0.5).floor() as i64,
        ScrollGesture::MoveTo(_) => return offset,
    };
    clamp_offset(candidate, extent, page)
}

/// Apply a gesture to one axis. Returns true if the offset changed.
pub(crate) fn scroll_axis(state: &mut ViewState, axis: Axis, gesture: ScrollGesture) -> bool {
    let current = state.scroll.offset(axis);
    let next = resolve_gesture(
        current,
        gesture,
        state.page.along(axis),
        state.extent.along(axis),
    );
    if next == current {
        return false;
    }
    debug!(?axis, from = current, to = next, "scroll");
    state.scroll.set_offset(axis, next);
    true
}

/// Wheel notches scroll rows, or columns when the redirect modifier is held.
pub(crate) fn wheel(state: &mut ViewState, event: &PointerEvent, step: i32) -> Option<Axis> {
    if event.wheel_delta == 0 {
        return None;
    }
    let axis = if event.modifiers.redirects_wheel() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let units = i64::from(event.wheel_delta).saturating_mul(i64::from(step));
    scroll_axis(state, axis, ScrollGesture::Units(units)).then_some(axis)
}
