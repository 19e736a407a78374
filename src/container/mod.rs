//! Windows, tabs and the viewer manager.
//!
//! A [`Window`] owns an ordered set of tabs, each a [`crate::viewer::GridView`].
//! The [`ViewerManager`] owns the windows and drives a host event loop
//! through the [`EventLoop`] trait, so the same code runs under a native
//! toolkit, a browser, or a scripted test host.

mod manager;
mod window;

pub use manager::{ViewerManager, DEFAULT_WINDOW_TITLE};
pub use window::{Dispatched, Tab, TabHandle, Window, WindowId};

/// The host toolkit's event loop, as seen by [`ViewerManager::pause`] and
/// [`ViewerManager::show`].
pub trait EventLoop {
    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> f64;

    /// Deliver every pending UI event to the manager's windows.
    ///
    /// Returns the number of events processed.
    fn process_pending(&mut self, manager: &mut ViewerManager) -> usize;

    /// Block for up to `ms` milliseconds waiting for new events.
    fn wait(&mut self, ms: f64);
}
