//! Browser binding: a tabbed matrix viewer on one canvas.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::{GridView, ScrollGesture};
use crate::container::{TabHandle, ViewerManager, WindowId, DEFAULT_WINDOW_TITLE};
use crate::render::{CanvasRenderer, Renderer};
use crate::source::{MonospaceMeasure, TextMeasure};
use crate::types::{Axis, Matrix, MatrixData, Modifiers, PointerEvent, ViewValue};

static FALLBACK_MEASURE: MonospaceMeasure = MonospaceMeasure {
    char_width: 7,
    font_size: 12,
};

// Event timestamps for autoscroll debouncing.
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

fn measure_of(renderer: &Renderer) -> &dyn TextMeasure {
    renderer.text_measure().unwrap_or(&FALLBACK_MEASURE)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn logical(physical: u32, dpr: f32) -> u32 {
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    (physical as f32 / dpr).round().max(0.0) as u32
}

fn parse_axis(axis: &str) -> Result<Axis, JsValue> {
    match axis {
        "x" | "horizontal" => Ok(Axis::Horizontal),
        "y" | "vertical" => Ok(Axis::Vertical),
        other => Err(JsValue::from_str(&format!("unknown axis {other:?}"))),
    }
}

fn shift(pressed: bool) -> Modifiers {
    if pressed {
        Modifiers::SHIFT
    } else {
        Modifiers::NONE
    }
}

/// Tabbed grid viewer bound to an HTML canvas.
#[wasm_bindgen]
pub struct MatView {
    manager: ViewerManager,
    window: WindowId,
    renderer: Renderer,
    width: u32,
    height: u32,
    dpr: f32,
}

impl MatView {
    fn active_view(&mut self) -> Option<&mut GridView> {
        self.manager.window_mut(self.window)?.selected_view_mut()
    }

    fn fit_tab(&mut self, tab: TabHandle) {
        let (width, height) = (self.width, self.height);
        if let Some(view) = self
            .manager
            .window_mut(self.window)
            .and_then(|w| w.view_mut(tab))
        {
            view.on_resize(width, height);
        }
    }

    fn open(&mut self, value: ViewValue) -> Result<u64, JsValue> {
        let (window, tab) = self.manager.view(value, measure_of(&self.renderer))?;
        self.window = window;
        self.fit_tab(tab);
        self.render()?;
        Ok(tab.get())
    }

    fn pointer(x: i32, y: i32, shift_key: bool) -> PointerEvent {
        PointerEvent::at(x, y)
            .with_modifiers(shift(shift_key))
            .at_time(now_ms())
    }

    /// Render only if the active view asked for it.
    fn render_if_needed(&mut self) -> Result<(), JsValue> {
        let needed = self
            .active_view()
            .is_some_and(|view| !view.take_events().is_empty());
        if needed {
            self.render()?;
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl MatView {
    /// Create a viewer drawing on `canvas`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<MatView, JsValue> {
        console_error_panic_hook::set_once();

        let physical_width = canvas.width().max(1);
        let physical_height = canvas.height().max(1);
        let mut renderer = Renderer::Canvas(CanvasRenderer::new(canvas)?);
        renderer.init()?;
        let width = logical(physical_width, dpr);
        let height = logical(physical_height, dpr);
        renderer.resize(width, height, dpr);

        let mut manager = ViewerManager::new();
        let window = manager.create_window(DEFAULT_WINDOW_TITLE);
        Ok(MatView {
            manager,
            window,
            renderer,
            width,
            height,
            dpr,
        })
    }

    /// Open a value (`{kind, value}` object) in a new tab. Returns the tab handle.
    #[wasm_bindgen]
    pub fn view(&mut self, value: JsValue) -> Result<u64, JsValue> {
        let value: ViewValue = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.open(value)
    }

    /// Open a JSON document in a new tab.
    #[wasm_bindgen]
    pub fn view_json(&mut self, json: &str) -> Result<u64, JsValue> {
        self.open(ViewValue::from_json_str(json)?)
    }

    /// Open a row-major float matrix in a new tab.
    #[wasm_bindgen]
    pub fn view_matrix(&mut self, rows: i32, columns: i32, data: Vec<f64>) -> Result<u64, JsValue> {
        let matrix = Matrix::with_signed_shape(
            i64::from(rows),
            i64::from(columns),
            MatrixData::Float64(data),
        )?;
        self.open(ViewValue::Matrix(matrix))
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.dpr = dpr;
        self.width = logical(physical_width, dpr);
        self.height = logical(physical_height, dpr);
        self.renderer.resize(self.width, self.height, dpr);
        let (width, height) = (self.width, self.height);
        if let Some(window) = self.manager.window_mut(self.window) {
            let handles: Vec<TabHandle> = window.tabs().iter().map(|t| t.handle()).collect();
            for handle in handles {
                if let Some(view) = window.view_mut(handle) {
                    view.on_resize(width, height);
                }
            }
        }
        let _ = self.render();
    }

    #[wasm_bindgen]
    pub fn mouse_down(&mut self, x: i32, y: i32, shift_key: bool) -> Result<(), JsValue> {
        let event = Self::pointer(x, y, shift_key);
        if let Some(view) = self.active_view() {
            view.on_pointer_press(&event);
        }
        self.render_if_needed()
    }

    #[wasm_bindgen]
    pub fn mouse_move(&mut self, x: i32, y: i32) -> Result<(), JsValue> {
        let event = Self::pointer(x, y, false);
        if let Some(view) = self.active_view() {
            view.on_pointer_drag(&event);
            view.on_pointer_motion(&event);
        }
        self.render_if_needed()
    }

    /// Pointer left the canvas.
    #[wasm_bindgen]
    pub fn mouse_leave(&mut self) -> Result<(), JsValue> {
        if let Some(view) = self.active_view() {
            view.on_pointer_leave();
        }
        self.render_if_needed()
    }

    /// Button release; activating a nested value opens and selects a new tab.
    #[wasm_bindgen]
    pub fn mouse_up(&mut self, x: i32, y: i32) -> Result<(), JsValue> {
        let event = Self::pointer(x, y, false);
        if let Some(view) = self.active_view() {
            view.on_pointer_release(&event);
        }
        let dispatched = self
            .manager
            .dispatch_activation(self.window, measure_of(&self.renderer));
        for tab in &dispatched.opened {
            self.fit_tab(*tab);
        }
        if let Some(err) = dispatched.error {
            self.render()?;
            return Err(err.into());
        }
        if dispatched.opened.is_empty() {
            self.render_if_needed()
        } else {
            self.render()
        }
    }

    /// Wheel notches (positive scrolls down); shift scrolls columns.
    #[wasm_bindgen]
    pub fn wheel(&mut self, delta: i32, shift_key: bool) -> Result<(), JsValue> {
        let event = PointerEvent::at(0, 0)
            .with_modifiers(shift(shift_key))
            .with_wheel(delta)
            .at_time(now_ms());
        if let Some(view) = self.active_view() {
            view.on_wheel(&event);
        }
        self.render_if_needed()
    }

    /// Scrollbar command: `kind` is `units`, `pages` or `moveto`.
    #[wasm_bindgen]
    pub fn scroll(&mut self, axis: &str, kind: &str, amount: f64) -> Result<bool, JsValue> {
        let axis = parse_axis(axis)?;
        let gesture = ScrollGesture::from_command(kind, amount)
            .ok_or_else(|| JsValue::from_str(&format!("unknown scroll command {kind:?}")))?;
        let changed = self
            .active_view()
            .is_some_and(|view| view.on_scroll(axis, gesture));
        self.render_if_needed()?;
        Ok(changed)
    }

    /// Scrollbar thumb `{start, end}` for `axis`.
    #[wasm_bindgen]
    pub fn scrollbar(&mut self, axis: &str) -> Result<JsValue, JsValue> {
        let axis = parse_axis(axis)?;
        let position = self
            .active_view()
            .map(|view| view.scrollbar(axis))
            .unwrap_or(crate::layout::ScrollbarPosition::FULL);
        serde_wasm_bindgen::to_value(&position).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn tab_titles(&self) -> Vec<String> {
        self.manager
            .window(self.window)
            .map(|w| w.tab_titles())
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn selected_tab(&self) -> Option<usize> {
        let window = self.manager.window(self.window)?;
        let selected = window.selected()?;
        window.tabs().iter().position(|t| t.handle() == selected)
    }

    #[wasm_bindgen]
    pub fn select_tab(&mut self, index: usize) -> Result<bool, JsValue> {
        let selected = self
            .manager
            .window_mut(self.window)
            .is_some_and(|w| match w.tabs().get(index).map(|t| t.handle()) {
                Some(handle) => w.select(handle),
                None => false,
            });
        if selected {
            self.render()?;
        }
        Ok(selected)
    }

    /// The user closed a tab. Closing the last tab closes the window.
    #[wasm_bindgen]
    pub fn close_tab(&mut self, index: usize) -> Result<bool, JsValue> {
        let closed = self
            .manager
            .window_mut(self.window)
            .is_some_and(|w| match w.tabs().get(index).map(|t| t.handle()) {
                Some(handle) => w.on_tab_closed(handle),
                None => false,
            });
        self.manager.prune();
        self.render()?;
        Ok(closed)
    }

    /// Draw commands of the active tab, for hosts that paint themselves.
    #[wasm_bindgen]
    pub fn draw_commands(&mut self) -> Result<JsValue, JsValue> {
        let commands = self
            .active_view()
            .map(|view| view.render())
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&commands).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Paint the active tab. Nothing is drawn while no tab is open.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<(), JsValue> {
        let Some(view) = self.active_view() else {
            return Ok(());
        };
        view.take_events();
        let commands = view.render();
        self.renderer.render(&commands)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn dpr(&self) -> f32 {
        self.dpr
    }
}
