// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser bindings for Line Mapper.
//!
//! [`LineMapperApp`] wraps a [`Session`] and keeps an SVG rendition of the
//! scene up to date. Build with `--features wasm` to expose it through
//! `wasm-bindgen`, and add `canvas` to draw onto a `<canvas>` as well. The
//! page wires its text area and the Draw/Clear/Fix/Unfix buttons straight to
//! the methods of the same name.

use linemap_adapters::SvgAdapter;
use linemap_core::{Action, Session, ViewerSettings};
use linemap_port::{ApplyError, SceneDelta, ScenePort};
use tracing::warn;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "canvas")]
mod canvas;

#[cfg(feature = "canvas")]
pub use canvas::CanvasAdapter;

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Every surface the app draws on, fed the same deltas.
struct Surfaces {
    svg: SvgAdapter,
    #[cfg(feature = "canvas")]
    canvas: Option<CanvasAdapter>,
}

impl ScenePort for Surfaces {
    fn apply_scene_delta(&mut self, delta: &SceneDelta) -> Result<(), ApplyError> {
        self.svg.apply_scene_delta(delta)?;
        #[cfg(feature = "canvas")]
        if let Some(canvas) = &mut self.canvas {
            canvas.apply_scene_delta(delta)?;
        }
        Ok(())
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.svg.set_error(message);
        #[cfg(feature = "canvas")]
        if let Some(canvas) = &mut self.canvas {
            canvas.set_error(message);
        }
    }

    fn render(&mut self) -> Result<(), ApplyError> {
        self.svg.render()?;
        #[cfg(feature = "canvas")]
        if let Some(canvas) = &mut self.canvas {
            canvas.render()?;
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.svg.resize(width, height, dpr);
        #[cfg(feature = "canvas")]
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(width, height, dpr);
        }
    }

    fn dispose(&mut self) {
        self.svg.dispose();
        #[cfg(feature = "canvas")]
        if let Some(canvas) = &mut self.canvas {
            canvas.dispose();
        }
    }
}

/// Line Mapper application state for a single page.
///
/// Each control call is handled to completion, redraw included, before it
/// returns. Errors from the input text never surface as `Err`; they show up in
/// [`LineMapperApp::error_message`]. `Err` is reserved for surface failures.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub struct LineMapperApp {
    settings: ViewerSettings,
    session: Session,
    surfaces: Surfaces,
}

impl Default for LineMapperApp {
    fn default() -> Self {
        Self::new()
    }
}

impl LineMapperApp {
    /// Create an app styled by `settings`.
    pub fn with_settings(settings: ViewerSettings) -> Self {
        let svg = SvgAdapter::new(settings.canvas.width, settings.canvas.height)
            .with_background(settings.canvas.background.clone())
            .with_error_color(settings.stroke.error_color.clone());
        let mut app = Self {
            session: Session::new(&settings),
            settings,
            surfaces: Surfaces {
                svg,
                #[cfg(feature = "canvas")]
                canvas: None,
            },
        };
        // An empty first frame keeps `svg()` a valid document from the start.
        if let Err(err) = app.session.present(&mut app.surfaces) {
            warn!(%err, "first frame failed");
        }
        app
    }

    /// Settings the app was created with.
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// Borrow the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn run(&mut self, action: Action) -> Result<(), String> {
        self.session.enqueue(action);
        self.session
            .pump(&mut self.surfaces)
            .map(|_| ())
            .map_err(|err| err.to_string())
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl LineMapperApp {
    /// Create an app with default settings.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self::with_settings(ViewerSettings::default())
    }

    /// Draw: parse `text` into the pending segments.
    pub fn draw(&mut self, text: &str) -> Result<(), String> {
        self.run(Action::Draw(text.to_owned()))
    }

    /// Clear: same as drawing empty text.
    pub fn clear(&mut self) -> Result<(), String> {
        self.run(Action::Clear)
    }

    /// Fix: promote pending segments.
    pub fn fix(&mut self) -> Result<(), String> {
        self.run(Action::Fix)
    }

    /// Unfix: discard fixed segments.
    pub fn unfix(&mut self) -> Result<(), String> {
        self.run(Action::Unfix)
    }

    /// Inline error message for the current input, if any.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = errorMessage))]
    pub fn error_message(&self) -> Option<String> {
        self.session.store().error_message()
    }

    /// Current scene as an SVG document.
    pub fn svg(&self) -> String {
        self.surfaces.svg.document().to_owned()
    }

    /// Visible segments (fixed first) as a JSON array.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = segmentsJson))]
    pub fn segments_json(&self) -> String {
        let visible: Vec<_> = self.session.store().visible().collect();
        serde_json::to_string(&visible).unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of fixed segments.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = fixedCount))]
    pub fn fixed_count(&self) -> usize {
        self.session.store().fixed().len()
    }

    /// Number of pending segments.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = pendingCount))]
    pub fn pending_count(&self) -> usize {
        self.session.store().pending().len()
    }

    /// Resize every surface and redraw.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) -> Result<(), String> {
        self.surfaces.resize(width, height, dpr);
        self.session
            .present(&mut self.surfaces)
            .map_err(|err| err.to_string())
    }
}

#[cfg(feature = "canvas")]
#[wasm_bindgen]
impl LineMapperApp {
    /// Draw onto `canvas` from now on, starting with the current scene.
    #[wasm_bindgen(js_name = attachCanvas)]
    pub fn attach_canvas(&mut self, canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        self.surfaces.canvas = Some(CanvasAdapter::new(canvas, &self.settings)?);
        self.session
            .present(&mut self.surfaces)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
