// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene port trait defining the renderer contract.

use crate::{ApplyError, SceneDelta};

/// Scene rendering port trait.
///
/// The domain (session) emits [`SceneDelta`]s; adapters (SVG, canvas, mocks)
/// implement this trait to draw them.
///
/// # Epoch Semantics
///
/// If an adapter receives a delta with an epoch it has already processed, it
/// should skip it and return `Ok(())`.
pub trait ScenePort {
    /// Apply a scene delta. Idempotent per epoch.
    fn apply_scene_delta(&mut self, delta: &SceneDelta) -> Result<(), ApplyError>;

    /// Show (`Some`) or hide (`None`) the inline error message.
    fn set_error(&mut self, message: Option<&str>);

    /// Render the current scene.
    fn render(&mut self) -> Result<(), ApplyError>;

    /// Resize viewport.
    fn resize(&mut self, width: u32, height: u32, dpr: f32);

    /// Dispose all resources.
    fn dispose(&mut self);
}
