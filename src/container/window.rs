use tracing::{error, info, warn};

use crate::error::{MatviewError, Result};
use crate::source::{Source, TextMeasure};
use crate::types::ViewValue;
use crate::viewer::GridView;

/// Identifies a tab within its window. Never reused by the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabHandle(u64);

impl TabHandle {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Identifies a window within its [`super::ViewerManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One tab: a titled grid view.
#[derive(Debug)]
pub struct Tab {
    handle: TabHandle,
    title: String,
    view: GridView,
}

impl Tab {
    pub fn handle(&self) -> TabHandle {
        self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view(&self) -> &GridView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut GridView {
        &mut self.view
    }
}

/// A top-level viewer window holding an ordered set of tabs.
///
/// Removing the last tab tears the window down. Teardown happens once;
/// later notifications are logged and ignored.
#[derive(Debug)]
pub struct Window {
    id: WindowId,
    title: String,
    tabs: Vec<Tab>,
    selected: Option<TabHandle>,
    next_handle: u64,
    destroyed: bool,
}

impl Window {
    pub fn new(id: WindowId, title: impl Into<String>) -> Self {
        let title = title.into();
        info!(window = id.get(), %title, "window opened");
        Self {
            id,
            title,
            tabs: Vec::new(),
            selected: None,
            next_handle: 1,
            destroyed: false,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        !self.destroyed
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_titles(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.title.clone()).collect()
    }

    pub fn selected(&self) -> Option<TabHandle> {
        self.selected
    }

    fn position(&self, handle: TabHandle) -> Option<usize> {
        self.tabs.iter().position(|t| t.handle == handle)
    }

    pub fn view(&self, handle: TabHandle) -> Option<&GridView> {
        self.tabs.iter().find(|t| t.handle == handle).map(|t| &t.view)
    }

    pub fn view_mut(&mut self, handle: TabHandle) -> Option<&mut GridView> {
        self.tabs
            .iter_mut()
            .find(|t| t.handle == handle)
            .map(|t| &mut t.view)
    }

    /// The grid view of the selected tab.
    pub fn selected_view_mut(&mut self) -> Option<&mut GridView> {
        let handle = self.selected?;
        self.view_mut(handle)
    }

    /// Add a tab. A `None` title uses the view's own title.
    ///
    /// The first tab of a window is selected automatically.
    pub fn add_view(&mut self, view: GridView, title: Option<String>) -> TabHandle {
        let handle = TabHandle(self.next_handle);
        self.next_handle += 1;
        let title = title.unwrap_or_else(|| view.title());
        info!(window = self.id.get(), tab = handle.get(), %title, "tab added");
        self.tabs.push(Tab {
            handle,
            title,
            view,
        });
        if self.selected.is_none() {
            self.selected = Some(handle);
        }
        handle
    }

    /// Remove a tab and return its view.
    ///
    /// The neighbouring tab takes over the selection. Removing the last tab
    /// tears the window down.
    pub fn remove_view(&mut self, handle: TabHandle) -> Option<GridView> {
        let index = self.position(handle)?;
        let tab = self.tabs.remove(index);
        info!(window = self.id.get(), tab = handle.get(), "tab removed");

        if self.selected == Some(handle) {
            self.selected = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(|t| t.handle);
        }
        if self.tabs.is_empty() {
            self.on_destroyed();
        }
        Some(tab.view)
    }

    /// The toolkit reported that the user closed a tab.
    ///
    /// The handle must match exactly one registered tab; anything else is
    /// logged as an error and leaves the other tabs untouched.
    pub fn on_tab_closed(&mut self, handle: TabHandle) -> bool {
        let matches = self.tabs.iter().filter(|t| t.handle == handle).count();
        if matches != 1 {
            error!(
                window = self.id.get(),
                tab = handle.get(),
                matches,
                "closed tab does not match exactly one view"
            );
            return false;
        }
        self.remove_view(handle).is_some()
    }

    /// The toolkit reported that the window is gone.
    ///
    /// Returns true only for the first notification.
    pub fn on_destroyed(&mut self) -> bool {
        if self.destroyed {
            warn!(window = self.id.get(), "window destroyed twice");
            return false;
        }
        self.destroyed = true;
        self.tabs.clear();
        self.selected = None;
        info!(window = self.id.get(), "window closed");
        true
    }

    /// Make `handle` the selected tab.
    pub fn select(&mut self, handle: TabHandle) -> bool {
        if self.position(handle).is_none() {
            return false;
        }
        self.selected = Some(handle);
        true
    }

    /// Open a new tab over `value` and select it.
    ///
    /// # Errors
    /// Fails when the view cannot be built (for example, zero-sized metrics).
    pub fn open_value(&mut self, value: ViewValue, measure: &dyn TextMeasure) -> Result<TabHandle> {
        let view = GridView::new(Source::for_value(value), measure)?;
        let handle = self.add_view(view, None);
        self.selected = Some(handle);
        Ok(handle)
    }

    /// Open a tab for every activation queued by any view.
    ///
    /// A value whose view cannot be built is skipped; the rest still open,
    /// and the last one opened ends up selected.
    pub fn dispatch_activations(&mut self, measure: &dyn TextMeasure) -> Dispatched {
        self.dispatch_with(|window, value| window.open_value(value, measure))
    }

    fn dispatch_with<F>(&mut self, mut open: F) -> Dispatched
    where
        F: FnMut(&mut Self, ViewValue) -> Result<TabHandle>,
    {
        let values: Vec<ViewValue> = self
            .tabs
            .iter_mut()
            .flat_map(|t| t.view.take_activations())
            .map(|(_, value)| value)
            .collect();
        let mut dispatched = Dispatched::default();
        for value in values {
            match open(self, value) {
                Ok(handle) => dispatched.opened.push(handle),
                Err(err) => {
                    warn!(window = self.id.get(), %err, "failed to open activated value");
                    dispatched.error.get_or_insert(err);
                }
            }
        }
        dispatched
    }
}

/// Outcome of [`Window::dispatch_activations`].
#[derive(Debug, Default)]
pub struct Dispatched {
    /// Tabs that were opened, in activation order
    pub opened: Vec<TabHandle>,
    /// First failure, if any activation could not be opened
    pub error: Option<MatviewError>,
}

impl Dispatched {
    /// The opened tabs, or the first failure.
    ///
    /// # Errors
    /// Returns the first error hit while opening tabs. Tabs opened before
    /// and after it stay in the window.
    pub fn into_result(self) -> Result<Vec<TabHandle>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.opened),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_wrap
)]
mod tests {
    use super::*;
    use crate::source::MonospaceMeasure;

    fn window_with_tabs(n: usize) -> (Window, Vec<TabHandle>) {
        let mut window = Window::new(WindowId::new(1), "test");
        let handles = (0..n)
            .map(|i| {
                let value = ViewValue::List(vec![ViewValue::Int(i as i64)]);
                window
                    .open_value(value, &MonospaceMeasure::default())
                    .unwrap()
            })
            .collect();
        (window, handles)
    }

    #[test]
    fn failed_activation_keeps_the_rest() {
        let (mut window, handles) = window_with_tabs(1);
        let view = window.view_mut(handles[0]).unwrap();
        for value in [ViewValue::Int(1), ViewValue::Int(2), ViewValue::Int(3)] {
            view.queue_event(crate::viewer::ViewEvent::Activate {
                cell: crate::types::CellPos::new(0, 0),
                value,
            });
        }

        let dispatched = window.dispatch_with(|w, value| match value {
            ViewValue::Int(2) => Err(MatviewError::Other("unbuildable".to_string())),
            other => w.open_value(other, &MonospaceMeasure::default()),
        });
        assert_eq!(dispatched.opened.len(), 2);
        assert!(dispatched.error.is_some());
        assert_eq!(window.len(), 3);
        assert_eq!(window.selected(), Some(dispatched.opened[1]));
        assert!(window.view_mut(handles[0]).unwrap().take_activations().is_empty());
    }

    #[test]
    fn removing_selected_tab_selects_neighbour() {
        let (mut window, handles) = window_with_tabs(3);
        window.select(handles[1]);
        window.remove_view(handles[1]).unwrap();
        assert_eq!(window.selected(), Some(handles[2]));
        window.remove_view(handles[2]).unwrap();
        assert_eq!(window.selected(), Some(handles[0]));
        assert!(window.is_open());
    }

    #[test]
    fn last_tab_removal_tears_down_once() {
        let (mut window, handles) = window_with_tabs(1);
        assert!(window.on_tab_closed(handles[0]));
        assert!(!window.is_open());
        assert!(!window.on_destroyed());
    }

    #[test]
    fn unknown_tab_close_is_ignored() {
        let (mut window, handles) = window_with_tabs(2);
        window.remove_view(handles[0]);
        assert!(!window.on_tab_closed(handles[0]));
        assert_eq!(window.len(), 1);
    }
}
