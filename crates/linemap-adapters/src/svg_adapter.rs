// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SVG adapter: renders the scene to a standalone SVG document.
//!
//! The document's `viewBox` is the whole drawing plane, so coordinates are
//! written as-is and the browser scales them to the display size.

use std::fmt::Write;

use linemap_port::{ApplyError, SceneDelta, ScenePort, PLANE_EXTENT};

use crate::scene_lines::SceneLines;

/// Font size of the error banner, in plane units.
const ERROR_FONT_SIZE: f64 = 120.0;

/// Scene adapter producing SVG markup.
#[derive(Debug, Clone)]
pub struct SvgAdapter {
    width: u32,
    height: u32,
    background: String,
    error_color: String,
    scene: SceneLines,
    error: Option<String>,
    document: String,
}

impl SvgAdapter {
    /// Create an adapter with the given display size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: "#ffffff".into(),
            error_color: "red".into(),
            scene: SceneLines::new(),
            error: None,
            document: String::new(),
        }
    }

    /// Set the background fill.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set the error banner color.
    pub fn with_error_color(mut self, color: impl Into<String>) -> Self {
        self.error_color = color.into();
        self
    }

    /// Markup produced by the last [`ScenePort::render`] call (empty before).
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of lines currently in the scene.
    pub fn line_count(&self) -> usize {
        self.scene.lines().len()
    }

    fn build(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {PLANE_EXTENT} {PLANE_EXTENT}">"#,
            self.width, self.height
        )?;
        writeln!(
            out,
            r#"  <rect width="{PLANE_EXTENT}" height="{PLANE_EXTENT}" fill="{}"/>"#,
            escape(&self.background)
        )?;
        for line in self.scene.lines() {
            writeln!(
                out,
                r#"  <line data-key="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                line.key.0,
                line.from[0],
                line.from[1],
                line.to[0],
                line.to[1],
                escape(&line.color),
                line.width
            )?;
        }
        if let Some(message) = &self.error {
            writeln!(
                out,
                r#"  <text x="{ERROR_FONT_SIZE}" y="{}" font-size="{ERROR_FONT_SIZE}" fill="{}">{}</text>"#,
                ERROR_FONT_SIZE * 2.0,
                escape(&self.error_color),
                escape(message)
            )?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

/// Escape text for use in XML attribute values and character data.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl ScenePort for SvgAdapter {
    fn apply_scene_delta(&mut self, delta: &SceneDelta) -> Result<(), ApplyError> {
        self.scene.apply(delta);
        Ok(())
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_owned);
    }

    fn render(&mut self) -> Result<(), ApplyError> {
        self.document = self
            .build()
            .map_err(|e| ApplyError::Backend(e.to_string()))?;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, _dpr: f32) {
        self.width = width;
        self.height = height;
    }

    fn dispose(&mut self) {
        self.scene.clear();
        self.error = None;
        self.document.clear();
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use linemap_port::{LineDef, LineKey, SceneOp};

    fn line(key: u64, color: &str) -> LineDef {
        LineDef {
            key: LineKey(key),
            from: [0.0, 1.5],
            to: [4000.0, 20.0],
            width: 15.0,
            color: color.into(),
        }
    }

    #[test]
    fn renders_one_line_element_per_line_in_order() {
        let mut svg = SvgAdapter::new(400, 300).with_background("black");
        let delta = SceneDelta {
            epoch: 1,
            ops: vec![
                SceneOp::Clear,
                SceneOp::UpsertLine(line(1, "red")),
                SceneOp::UpsertLine(line(2, "blue")),
            ],
        };
        svg.apply_scene_delta(&delta).expect("apply");
        svg.render().expect("render");

        let doc = svg.document();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"width="400" height="300" viewBox="0 0 4000 4000""#));
        assert!(doc.contains(r#"fill="black""#));
        assert_eq!(doc.matches("<line ").count(), 2);
        let red = doc.find(r#"stroke="red""#).expect("red line");
        let blue = doc.find(r#"stroke="blue""#).expect("blue line");
        assert!(red < blue);
        assert!(doc.contains(r#"x1="0" y1="1.5" x2="4000" y2="20""#));
        assert!(!doc.contains("<text"));
    }

    #[test]
    fn error_banner_and_colors_are_escaped() {
        let mut svg = SvgAdapter::new(100, 100);
        let delta = SceneDelta {
            epoch: 1,
            ops: vec![SceneOp::UpsertLine(line(1, "\"><script>"))],
        };
        svg.apply_scene_delta(&delta).expect("apply");
        svg.set_error(Some("Error: <Line 1>"));
        svg.render().expect("render");

        let doc = svg.document();
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&quot;&gt;&lt;script&gt;"));
        assert!(doc.contains(">Error: &lt;Line 1&gt;</text>"));
    }

    #[test]
    fn document_is_empty_until_rendered_and_after_dispose() {
        let mut svg = SvgAdapter::new(10, 10);
        assert!(svg.document().is_empty());
        svg.render().expect("render");
        assert!(!svg.document().is_empty());
        svg.dispose();
        assert!(svg.document().is_empty());
    }
}
