use tracing::{debug, info};

use super::window::{Dispatched, TabHandle, Window, WindowId};
use super::EventLoop;
use crate::error::Result;
use crate::source::TextMeasure;
use crate::types::ViewValue;

/// Title of windows opened implicitly by [`ViewerManager::view`].
pub const DEFAULT_WINDOW_TITLE: &str = "Matrix Viewer";

/// Longest single wait while driving the event loop.
const POLL_INTERVAL_MS: f64 = 20.0;

/// Registry of open viewer windows.
///
/// Owned by the host and passed explicitly; `view` targets the most recently
/// created window that is still open.
#[derive(Debug, Default)]
pub struct ViewerManager {
    windows: Vec<Window>,
    next_id: u64,
    last_window: Option<WindowId>,
}

impl ViewerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty window and make it the default target.
    pub fn create_window(&mut self, title: impl Into<String>) -> WindowId {
        self.next_id += 1;
        let id = WindowId::new(self.next_id);
        self.windows.push(Window::new(id, title));
        self.last_window = Some(id);
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn last_window(&self) -> Option<WindowId> {
        self.last_window
    }

    /// Number of windows that have not been torn down.
    pub fn open_windows(&self) -> usize {
        self.windows.iter().filter(|w| w.is_open()).count()
    }

    /// Open `value` in a new tab of the default window, creating one if needed.
    ///
    /// # Errors
    /// Fails when the view cannot be built.
    pub fn view(
        &mut self,
        value: ViewValue,
        measure: &dyn TextMeasure,
    ) -> Result<(WindowId, TabHandle)> {
        let target = self
            .last_window
            .filter(|id| self.window(*id).is_some_and(Window::is_open));
        let id = match target {
            Some(id) => id,
            None => self.create_window(DEFAULT_WINDOW_TITLE),
        };
        let window = self
            .window_mut(id)
            .ok_or_else(|| format!("window {} vanished", id.get()))?;
        let tab = window.open_value(value, measure)?;
        Ok((id, tab))
    }

    /// Open tabs for activations queued in one window.
    ///
    /// Closed or unknown windows dispatch nothing.
    pub fn dispatch_activation(
        &mut self,
        id: WindowId,
        measure: &dyn TextMeasure,
    ) -> Dispatched {
        match self.window_mut(id) {
            Some(window) if window.is_open() => window.dispatch_activations(measure),
            _ => Dispatched::default(),
        }
    }

    /// Forget windows that have been torn down.
    pub fn prune(&mut self) -> usize {
        let before = self.windows.len();
        self.windows.retain(Window::is_open);
        if let Some(id) = self.last_window {
            if self.window(id).is_none() {
                self.last_window = None;
            }
        }
        let removed = before - self.windows.len();
        if removed > 0 {
            info!(removed, remaining = self.windows.len(), "pruned closed windows");
        }
        removed
    }

    /// Drive the host event loop for `timeout_ms`.
    ///
    /// Returns early once every window is closed. A zero timeout processes
    /// pending events once and returns; with no windows open this only waits.
    pub fn pause(&mut self, host: &mut dyn EventLoop, timeout_ms: f64) {
        if self.open_windows() == 0 {
            host.wait(timeout_ms.max(0.0));
            return;
        }
        let start = host.now_ms();
        loop {
            let processed = host.process_pending(self);
            self.prune();
            debug!(processed, open = self.open_windows(), "pause tick");
            if self.open_windows() == 0 || timeout_ms <= 0.0 {
                return;
            }
            let elapsed = host.now_ms() - start;
            if elapsed >= timeout_ms {
                return;
            }
            host.wait((timeout_ms - elapsed).min(POLL_INTERVAL_MS));
        }
    }

    /// Drive the host event loop until every window is closed.
    ///
    /// A non-blocking call only processes pending events once.
    pub fn show(&mut self, host: &mut dyn EventLoop, block: bool) {
        if self.open_windows() == 0 {
            return;
        }
        if !block {
            host.process_pending(self);
            self.prune();
            return;
        }
        while self.open_windows() > 0 {
            host.process_pending(self);
            self.prune();
            if self.open_windows() > 0 {
                host.wait(POLL_INTERVAL_MS);
            }
        }
        info!("all windows closed");
    }
}
