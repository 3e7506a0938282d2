// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock adapter for headless testing of ScenePort consumers.
//!
//! MockAdapter tracks scene state in memory without drawing anything.
//! Use it to verify delta sequences and epoch semantics.

use linemap_port::{ApplyError, LineDef, LineKey, SceneDelta, ScenePort};

use crate::scene_lines::SceneLines;

/// Mock scene adapter for testing.
#[derive(Debug, Default)]
pub struct MockAdapter {
    scene: SceneLines,
    /// Current inline error message.
    pub error: Option<String>,
    /// Number of deltas actually applied (stale ones excluded).
    pub applied_count: u32,
    /// Number of render calls.
    pub render_count: u32,
    /// Current viewport dimensions.
    pub viewport: (u32, u32, f32),
    /// Whether dispose has been called.
    pub disposed: bool,
}

impl MockAdapter {
    /// Create a new mock adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines, in draw order.
    pub fn lines(&self) -> &[LineDef] {
        self.scene.lines()
    }

    /// Get the number of lines in the scene.
    pub fn line_count(&self) -> usize {
        self.scene.lines().len()
    }

    /// Keys of the current lines, in draw order.
    pub fn keys(&self) -> Vec<LineKey> {
        self.scene.keys()
    }

    /// Get line by key.
    pub fn get_line(&self, key: LineKey) -> Option<&LineDef> {
        self.scene.lines().iter().find(|line| line.key == key)
    }

    /// Get the last applied epoch.
    pub fn last_epoch(&self) -> Option<u64> {
        self.scene.last_epoch()
    }
}

impl ScenePort for MockAdapter {
    fn apply_scene_delta(&mut self, delta: &SceneDelta) -> Result<(), ApplyError> {
        if self.scene.apply(delta) {
            self.applied_count += 1;
        }
        Ok(())
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_owned);
    }

    fn render(&mut self) -> Result<(), ApplyError> {
        self.render_count += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.viewport = (width, height, dpr);
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.scene.clear();
        self.error = None;
    }
}
