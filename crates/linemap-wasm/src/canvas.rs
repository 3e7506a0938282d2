// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `<canvas>` adapter: draws the scene with the 2D context.
//!
//! This is the only place that touches [`CanvasRenderingContext2d`]. The plane
//! is scaled to the canvas backing size on every frame.

use linemap_adapters::SceneLines;
use linemap_core::ViewerSettings;
use linemap_port::{ApplyError, SceneDelta, ScenePort, PLANE_EXTENT};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Error banner font size and baseline, in plane units.
const ERROR_FONT_SIZE: f64 = 120.0;

/// Scene adapter drawing onto an HTML canvas.
pub struct CanvasAdapter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: String,
    error_color: String,
    scene: SceneLines,
    error: Option<String>,
}

impl CanvasAdapter {
    /// Wrap `canvas`, failing when it has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, settings: &ViewerSettings) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            background: settings.canvas.background.clone(),
            error_color: settings.stroke.error_color.clone(),
            scene: SceneLines::new(),
            error: None,
        })
    }

    fn draw(&self) -> Result<(), JsValue> {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());

        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx
            .set_transform(w / PLANE_EXTENT, 0.0, 0.0, h / PLANE_EXTENT, 0.0, 0.0)?;
        self.ctx.set_line_cap("round");
        for line in self.scene.lines() {
            self.ctx.begin_path();
            self.ctx.set_stroke_style_str(&line.color);
            self.ctx.set_line_width(line.width);
            self.ctx.move_to(line.from[0], line.from[1]);
            self.ctx.line_to(line.to[0], line.to[1]);
            self.ctx.stroke();
        }

        if let Some(message) = &self.error {
            self.ctx.set_fill_style_str(&self.error_color);
            self.ctx.set_font(&format!("{ERROR_FONT_SIZE}px sans-serif"));
            self.ctx
                .fill_text(message, ERROR_FONT_SIZE, ERROR_FONT_SIZE * 2.0)?;
        }
        Ok(())
    }
}

impl ScenePort for CanvasAdapter {
    fn apply_scene_delta(&mut self, delta: &SceneDelta) -> Result<(), ApplyError> {
        self.scene.apply(delta);
        Ok(())
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_owned);
    }

    fn render(&mut self) -> Result<(), ApplyError> {
        self.draw()
            .map_err(|err| ApplyError::Backend(format!("{err:?}")))
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        let scale = f64::from(dpr.max(1.0));
        // Backing store in device pixels; CSS size stays with the page.
        self.canvas.set_width((f64::from(width) * scale).round() as u32);
        self.canvas.set_height((f64::from(height) * scale).round() as u32);
    }

    fn dispose(&mut self) {
        self.scene.clear();
        self.error = None;
    }
}
