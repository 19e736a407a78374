//! Toolkit-neutral input records.
//!
//! Host bindings translate their native mouse and wheel events into
//! [`PointerEvent`] before calling into the grid view.

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };

    /// Decode an X11/Tk style state bitmask (shift = 0x01, control = 0x04, alt = 0x08).
    pub const fn from_state_mask(mask: u32) -> Self {
        Self {
            shift: mask & 0x01 != 0,
            control: mask & 0x04 != 0,
            alt: mask & 0x08 != 0,
        }
    }

    /// Whether a press should extend the previous selection instead of starting a new one.
    pub const fn extends_range(self) -> bool {
        self.shift
    }

    /// Whether a vertical wheel gesture should scroll columns instead of rows.
    pub const fn redirects_wheel(self) -> bool {
        self.shift
    }
}

/// A pointer event in viewport pixel coordinates.
///
/// Coordinates may be negative or beyond the viewport while a drag is in
/// progress. `time_ms` is a monotonic timestamp used for the autoscroll debounce.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub modifiers: Modifiers,
    /// Wheel notches, positive scrolls towards higher indices.
    pub wheel_delta: i32,
    pub time_ms: f64,
}

impl PointerEvent {
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::NONE,
            wheel_delta: 0,
            time_ms: 0.0,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_wheel(mut self, delta: i32) -> Self {
        self.wheel_delta = delta;
        self
    }

    #[must_use]
    pub const fn at_time(mut self, time_ms: f64) -> Self {
        self.time_ms = time_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mask_decoding() {
        assert_eq!(Modifiers::from_state_mask(0x01), Modifiers::SHIFT);
        let m = Modifiers::from_state_mask(0x0c);
        assert!(m.control && m.alt && !m.shift);
        assert!(!Modifiers::from_state_mask(0).extends_range());
    }
}
