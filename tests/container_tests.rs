//! Container tests: tabs, drill-down activation and the event-loop driver.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use matview::container::DEFAULT_WINDOW_TITLE;
use matview::types::{PointerEvent, ViewValue};
use matview::{EventLoop, MonospaceMeasure, ViewEvent, ViewerManager, WindowId};

// =============================================================================
// Scripted host
// =============================================================================

/// Event loop with a fake clock. Closes every window on the `close_on`-th tick.
#[derive(Default)]
struct ScriptedHost {
    clock: f64,
    ticks: usize,
    waits: Vec<f64>,
    close_on: Option<usize>,
}

impl ScriptedHost {
    fn closing_on(tick: usize) -> Self {
        Self {
            close_on: Some(tick),
            ..Self::default()
        }
    }
}

impl EventLoop for ScriptedHost {
    fn now_ms(&self) -> f64 {
        self.clock
    }

    fn process_pending(&mut self, manager: &mut ViewerManager) -> usize {
        self.ticks += 1;
        if self.close_on == Some(self.ticks) {
            let ids: Vec<WindowId> = manager.windows().iter().map(|w| w.id()).collect();
            for id in ids {
                manager.window_mut(id).unwrap().on_destroyed();
            }
            return 1;
        }
        0
    }

    fn wait(&mut self, ms: f64) {
        self.waits.push(ms);
        self.clock += ms;
    }
}

fn manager_with_window() -> ViewerManager {
    let mut manager = ViewerManager::new();
    manager
        .view(ViewValue::Int(1), &MonospaceMeasure::default())
        .unwrap();
    manager
}

// =============================================================================
// pause / show
// =============================================================================

#[test]
fn pause_without_windows_only_sleeps() {
    let mut manager = ViewerManager::new();
    let mut host = ScriptedHost::default();
    manager.pause(&mut host, 75.0);
    assert_eq!(host.ticks, 0);
    assert_eq!(host.waits, vec![75.0]);
}

#[test]
fn pause_with_zero_timeout_processes_once() {
    let mut manager = manager_with_window();
    let mut host = ScriptedHost::default();
    manager.pause(&mut host, 0.0);
    assert_eq!(host.ticks, 1);
    assert!(host.waits.is_empty());
}

#[test]
fn pause_polls_until_timeout() {
    let mut manager = manager_with_window();
    let mut host = ScriptedHost::default();
    manager.pause(&mut host, 50.0);
    assert_eq!(host.waits, vec![20.0, 20.0, 10.0]);
    assert_eq!(host.ticks, 4);
    assert_eq!(manager.open_windows(), 1);
}

#[test]
fn pause_returns_when_windows_close() {
    let mut manager = manager_with_window();
    let mut host = ScriptedHost::closing_on(2);
    manager.pause(&mut host, 10_000.0);
    assert_eq!(host.ticks, 2);
    assert_eq!(host.waits.len(), 1);
    assert!(manager.windows().is_empty());
    assert_eq!(manager.last_window(), None);
}

#[test]
fn show_without_windows_returns_immediately() {
    let mut manager = ViewerManager::new();
    let mut host = ScriptedHost::default();
    manager.show(&mut host, true);
    assert_eq!(host.ticks, 0);
    assert!(host.waits.is_empty());
}

#[test]
fn non_blocking_show_processes_once() {
    let mut manager = manager_with_window();
    let mut host = ScriptedHost::default();
    manager.show(&mut host, false);
    assert_eq!(host.ticks, 1);
    assert_eq!(manager.open_windows(), 1);
}

#[test]
fn blocking_show_runs_until_all_windows_close() {
    let mut manager = manager_with_window();
    manager.create_window("second");
    let mut host = ScriptedHost::closing_on(3);
    manager.show(&mut host, true);
    assert_eq!(host.ticks, 3);
    assert_eq!(host.waits, vec![20.0, 20.0]);
    assert_eq!(manager.open_windows(), 0);
}

// =============================================================================
// Windows and tabs
// =============================================================================

#[test]
fn view_opens_default_window_and_selects_new_tabs() {
    let mut manager = ViewerManager::new();
    let measure = MonospaceMeasure::default();
    let (id, first) = manager
        .view(ViewValue::List(vec![ViewValue::Int(1)]), &measure)
        .unwrap();
    let (same, second) = manager
        .view(ViewValue::Matrix(common::numbered_matrix(3, 2)), &measure)
        .unwrap();
    assert_eq!(id, same);
    assert_ne!(first, second);

    let window = manager.window(id).unwrap();
    assert_eq!(window.title(), DEFAULT_WINDOW_TITLE);
    assert_eq!(window.selected(), Some(second));
    assert_eq!(
        window.tab_titles(),
        vec!["list with 1 elements".to_string(), "2 x 3 int64".to_string()]
    );
}

#[test]
fn view_targets_most_recent_window() {
    let mut manager = manager_with_window();
    let newer = manager.create_window("analysis");
    let (id, _) = manager
        .view(ViewValue::Int(2), &MonospaceMeasure::default())
        .unwrap();
    assert_eq!(id, newer);
    assert_eq!(manager.window(newer).unwrap().len(), 1);
}

#[test]
fn closing_every_tab_closes_the_window() {
    let mut manager = manager_with_window();
    let id = manager.last_window().unwrap();
    let window = manager.window_mut(id).unwrap();
    let handle = window.selected().unwrap();
    assert!(window.on_tab_closed(handle));
    assert!(!window.is_open());
    assert!(!window.on_tab_closed(handle));
    assert_eq!(manager.prune(), 1);
}

// =============================================================================
// Activation
// =============================================================================

// A list holding a matrix and a scalar, measured with the default monospace
// font: the value column is 143 px wide ("(2, 2) int64 matrix" plus padding),
// row headings are 17 px and rows 22 px, so cell (0, 0) is centered near (88, 33).
fn drill_down_manager() -> (ViewerManager, WindowId) {
    manager_viewing(ViewValue::List(vec![
        ViewValue::Matrix(common::numbered_matrix(2, 2)),
        ViewValue::Int(5),
    ]))
}

// Same geometry as above, but the matrix is the only entry.
fn single_entry_manager() -> (ViewerManager, WindowId) {
    manager_viewing(ViewValue::List(vec![ViewValue::Matrix(
        common::numbered_matrix(2, 2),
    )]))
}

fn manager_viewing(value: ViewValue) -> (ViewerManager, WindowId) {
    let mut manager = ViewerManager::new();
    let (id, _) = manager.view(value, &MonospaceMeasure::default()).unwrap();
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    view.on_resize(400, 300);
    view.take_events();
    (manager, id)
}

fn click(manager: &mut ViewerManager, id: WindowId, x: i32, y: i32) {
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    view.on_pointer_press(&PointerEvent::at(x, y));
    view.on_pointer_release(&PointerEvent::at(x, y));
}

#[test]
fn clicking_a_nested_value_opens_a_tab() {
    let (mut manager, id) = drill_down_manager();
    click(&mut manager, id, 88, 33);

    let opened = manager
        .dispatch_activation(id, &MonospaceMeasure::default())
        .into_result()
        .unwrap();
    assert_eq!(opened.len(), 1);

    let window = manager.window(id).unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(window.selected(), Some(opened[0]));
    assert_eq!(window.tab_titles()[1], "2 x 2 int64");
    let nested = window.view(opened[0]).unwrap();
    assert_eq!(nested.extent(), matview::LogicalExtent::new(2, 2));
}

#[test]
fn activation_is_queued_as_an_event() {
    let (mut manager, id) = drill_down_manager();
    click(&mut manager, id, 88, 33);
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    let events = view.take_events();
    assert!(events.iter().any(|e| matches!(
        e,
        ViewEvent::Activate { cell, value: ViewValue::Matrix(_) }
            if cell.column == 0 && cell.row == 0
    )));
}

#[test]
fn clicking_a_scalar_opens_nothing() {
    let (mut manager, id) = drill_down_manager();
    // Row 1 spans y 44..66
    click(&mut manager, id, 88, 55);
    let opened = manager
        .dispatch_activation(id, &MonospaceMeasure::default())
        .into_result()
        .unwrap();
    assert!(opened.is_empty());
    assert_eq!(manager.window(id).unwrap().len(), 1);
}

#[test]
fn drag_ending_on_nested_value_opens_nothing() {
    let (mut manager, id) = drill_down_manager();
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    view.on_pointer_press(&PointerEvent::at(88, 55));
    view.on_pointer_drag(&PointerEvent::at(88, 33));
    view.on_pointer_release(&PointerEvent::at(88, 33));
    let opened = manager
        .dispatch_activation(id, &MonospaceMeasure::default())
        .into_result()
        .unwrap();
    assert!(opened.is_empty());
}

#[test]
fn activation_in_closed_window_is_dropped() {
    let (mut manager, id) = drill_down_manager();
    click(&mut manager, id, 88, 33);
    manager.window_mut(id).unwrap().on_destroyed();
    let opened = manager
        .dispatch_activation(id, &MonospaceMeasure::default())
        .into_result()
        .unwrap();
    assert!(opened.is_empty());
}

#[test]
fn row_selection_over_a_nested_value_opens_nothing() {
    let (mut manager, id) = drill_down_manager();
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    // Row heading of row 0, then release on the matrix cell it selected
    view.on_pointer_press(&PointerEvent::at(8, 33));
    view.on_pointer_drag(&PointerEvent::at(88, 33));
    view.on_pointer_release(&PointerEvent::at(88, 33));
    assert_eq!(
        view.selection(),
        Some(matview::types::SelectionRect::new(0, 0, 1, 1))
    );
    assert!(view.take_activations().is_empty());
}

#[test]
fn corner_selection_of_a_single_entry_opens_nothing() {
    let (mut manager, id) = single_entry_manager();
    let view = manager
        .window_mut(id)
        .unwrap()
        .selected_view_mut()
        .unwrap();
    view.on_pointer_press(&PointerEvent::at(5, 5));
    view.on_pointer_release(&PointerEvent::at(88, 33));
    assert_eq!(
        view.selection(),
        Some(matview::types::SelectionRect::new(0, 0, 1, 1))
    );
    let dispatched = manager.dispatch_activation(id, &MonospaceMeasure::default());
    assert!(dispatched.opened.is_empty());
    assert!(dispatched.error.is_none());
    assert_eq!(manager.window(id).unwrap().len(), 1);
}

#[test]
fn clicking_the_single_entry_still_opens_it() {
    let (mut manager, id) = single_entry_manager();
    click(&mut manager, id, 88, 33);
    let dispatched = manager.dispatch_activation(id, &MonospaceMeasure::default());
    assert_eq!(dispatched.opened.len(), 1);
    assert_eq!(manager.window(id).unwrap().len(), 2);
}
