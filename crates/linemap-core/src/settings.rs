// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Viewer settings shared by the Line Mapper surfaces (canvas size + stroke).

use serde::{Deserialize, Serialize};

/// Config key under which [`ViewerSettings`] are stored.
pub const SETTINGS_KEY: &str = "viewer";

/// Saved settings for a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerSettings {
    /// Output surface.
    pub canvas: CanvasSettings,
    /// Line and error styling.
    pub stroke: StrokeSettings,
}

/// Display size and background of the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Background fill (any CSS color).
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: "#ffffff".into(),
        }
    }
}

/// Stroke styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    /// Line width in plane units.
    pub width: f64,
    /// Color of the inline error message.
    pub error_color: String,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            width: 15.0,
            error_color: "red".into(),
        }
    }
}
