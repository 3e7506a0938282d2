// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Adapters for linemap-port.
//!
//! This crate provides:
//! - SvgAdapter, which renders the scene to a standalone SVG document
//! - MockAdapter for headless testing of ScenePort consumers
//! - SceneLines, the ordered line list both of them (and the browser canvas
//!   adapter) keep

mod mock_adapter;
mod scene_lines;
mod svg_adapter;

pub use mock_adapter::*;
pub use scene_lines::*;
pub use svg_adapter::*;
