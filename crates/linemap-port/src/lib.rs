// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene port contract for Line Mapper renderers.
//!
//! This crate defines the contract between the session state machine and the
//! surfaces that draw it (SVG, `<canvas>`, headless mocks).
//!
//! # Design Principles
//!
//! - **Renderers are dumb** — They receive deltas and draw. No parsing, no
//!   fixed/pending bookkeeping.
//! - **Epoch-scoped deltas** — A delta whose epoch is not newer than the last
//!   applied one is skipped.

use thiserror::Error;

/// Error type for scene delta application and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// A backend-specific error occurred.
    #[error("backend error: {0}")]
    Backend(String),
}

mod port;
mod types;

pub use port::ScenePort;
pub use types::{LineDef, LineKey, SceneDelta, SceneOp, PLANE_EXTENT};
