// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drawable line segment.

use linemap_port::{LineDef, LineKey};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a segment, in assignment order.
pub type SegmentId = u64;

/// One line to draw: two endpoints in the `[0, 4000]` plane and a color label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Assignment id; stable rendering key.
    pub id: SegmentId,
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
    /// Color label (never a bare number).
    pub color: String,
}

impl Segment {
    /// Renderer view of this segment.
    pub fn to_line(&self, width: f64) -> LineDef {
        LineDef {
            key: LineKey(self.id),
            from: [self.x1, self.y1],
            to: [self.x2, self.y2],
            width,
            color: self.color.clone(),
        }
    }
}
