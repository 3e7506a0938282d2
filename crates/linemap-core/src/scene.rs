// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure projection from store state to a renderer delta.

use linemap_port::{SceneDelta, SceneOp};

use crate::store::SegmentStore;

/// Full redraw of `fixed ++ pending` at `epoch`.
///
/// The delta starts with [`SceneOp::Clear`], so applying it leaves the
/// renderer holding exactly the visible segments in order.
pub fn project(store: &SegmentStore, epoch: u64, stroke_width: f64) -> SceneDelta {
    let mut ops = Vec::with_capacity(1 + store.fixed().len() + store.pending().len());
    ops.push(SceneOp::Clear);
    ops.extend(
        store
            .visible()
            .map(|segment| SceneOp::UpsertLine(segment.to_line(stroke_width))),
    );
    SceneDelta { epoch, ops }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linemap_port::LineKey;

    #[test]
    fn projection_clears_then_lists_fixed_before_pending() {
        let mut store = SegmentStore::new();
        store.draw("0 0 1 1 red");
        assert!(store.promote());
        store.draw("0 0 2 2 blue");

        let delta = project(&store, 4, 2.0);
        assert_eq!(delta.epoch, 4);
        assert_eq!(delta.ops.len(), 3);
        assert_eq!(delta.ops[0], SceneOp::Clear);
        let keys: Vec<LineKey> = delta.ops[1..]
            .iter()
            .filter_map(|op| match op {
                SceneOp::UpsertLine(line) => Some(line.key),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec![LineKey(1), LineKey(2)]);
    }

    #[test]
    fn empty_store_projects_to_clear_only() {
        let delta = project(&SegmentStore::new(), 1, 1.0);
        assert_eq!(delta.ops, vec![SceneOp::Clear]);
    }
}
