// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core scene types for the rendering port contract.

/// Side length of the square drawing plane, in plane units.
///
/// Every coordinate handed to a renderer lies in `[0, PLANE_EXTENT]`.
pub const PLANE_EXTENT: f64 = 4000.0;

/// Key type for lines (the segment's assignment id).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey(pub u64);

/// Line definition for the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDef {
    /// Unique key for this line.
    pub key: LineKey,
    /// Start point `[x, y]` in plane units.
    pub from: [f64; 2],
    /// End point `[x, y]` in plane units.
    pub to: [f64; 2],
    /// Stroke width in plane units.
    pub width: f64,
    /// Color label, passed through to the backend untouched.
    pub color: String,
}

/// Scene operation.
///
/// Operations are applied in order within a [`SceneDelta`] batch.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Insert or update a line. New keys are drawn on top of existing ones.
    UpsertLine(LineDef),
    /// Clear the entire scene.
    Clear,
}

/// Scene delta: a batch of operations scoped to an epoch.
///
/// There is no cap on the batch size; a full redraw carries one op per
/// visible segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneDelta {
    /// Epoch counter (monotonically increasing per session).
    pub epoch: u64,
    /// Operations to apply.
    pub ops: Vec<SceneOp>,
}
