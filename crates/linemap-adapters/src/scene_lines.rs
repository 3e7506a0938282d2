// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered line list with epoch tracking, shared by adapters.

use std::collections::HashMap;

use linemap_port::{LineDef, LineKey, SceneDelta, SceneOp};

/// Scene state as most adapters need it: lines in draw order plus the last
/// applied epoch.
#[derive(Debug, Clone, Default)]
pub struct SceneLines {
    lines: Vec<LineDef>,
    /// Position of each key in `lines`.
    index: HashMap<LineKey, usize>,
    last_epoch: Option<u64>,
}

impl SceneLines {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `delta` unless its epoch is stale. Returns whether it was applied.
    pub fn apply(&mut self, delta: &SceneDelta) -> bool {
        if self.last_epoch.is_some_and(|last| delta.epoch <= last) {
            return false;
        }

        for op in &delta.ops {
            match op {
                SceneOp::UpsertLine(line) => match self.index.get(&line.key) {
                    Some(&at) => self.lines[at] = line.clone(),
                    None => {
                        self.index.insert(line.key, self.lines.len());
                        self.lines.push(line.clone());
                    }
                },
                SceneOp::Clear => {
                    self.lines.clear();
                    self.index.clear();
                }
            }
        }
        self.last_epoch = Some(delta.epoch);
        true
    }

    /// Lines in draw order.
    pub fn lines(&self) -> &[LineDef] {
        &self.lines
    }

    /// Keys in draw order.
    pub fn keys(&self) -> Vec<LineKey> {
        self.lines.iter().map(|line| line.key).collect()
    }

    /// Last applied epoch.
    pub fn last_epoch(&self) -> Option<u64> {
        self.last_epoch
    }

    /// Forget all lines and the epoch.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.index.clear();
        self.last_epoch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(key: u64, color: &str) -> LineDef {
        LineDef {
            key: LineKey(key),
            from: [0.0, 0.0],
            to: [10.0, 10.0],
            width: 1.0,
            color: color.into(),
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut scene = SceneLines::new();
        let delta = SceneDelta {
            epoch: 1,
            ops: vec![
                SceneOp::UpsertLine(make_line(1, "red")),
                SceneOp::UpsertLine(make_line(2, "blue")),
                SceneOp::UpsertLine(make_line(1, "green")),
            ],
        };
        assert!(scene.apply(&delta));
        assert_eq!(scene.keys(), vec![LineKey(1), LineKey(2)]);
        assert_eq!(scene.lines()[0].color, "green");
    }

    #[test]
    fn test_clear_then_upsert_reuses_keys() {
        let mut scene = SceneLines::new();
        let delta1 = SceneDelta {
            epoch: 1,
            ops: vec![
                SceneOp::UpsertLine(make_line(1, "red")),
                SceneOp::UpsertLine(make_line(2, "blue")),
            ],
        };
        assert!(scene.apply(&delta1));

        let delta2 = SceneDelta {
            epoch: 2,
            ops: vec![SceneOp::Clear, SceneOp::UpsertLine(make_line(2, "green"))],
        };
        assert!(scene.apply(&delta2));
        assert_eq!(scene.keys(), vec![LineKey(2)]);
        assert_eq!(scene.lines()[0].color, "green");

        let delta3 = SceneDelta {
            epoch: 3,
            ops: vec![SceneOp::Clear],
        };
        assert!(scene.apply(&delta3));
        assert!(scene.lines().is_empty());
    }

    #[test]
    fn test_stale_epoch_is_skipped() {
        let mut scene = SceneLines::new();
        let delta1 = SceneDelta {
            epoch: 5,
            ops: vec![SceneOp::UpsertLine(make_line(1, "red"))],
        };
        assert!(scene.apply(&delta1));

        let stale = SceneDelta {
            epoch: 5,
            ops: vec![SceneOp::Clear],
        };
        assert!(!scene.apply(&stale));
        assert_eq!(scene.lines().len(), 1);
        assert_eq!(scene.last_epoch(), Some(5));
    }

    #[test]
    fn test_large_delta_is_applied_whole() {
        let mut scene = SceneLines::new();
        let mut ops = vec![SceneOp::Clear];
        ops.extend((1..=20_000).map(|key| SceneOp::UpsertLine(make_line(key, "red"))));
        assert!(scene.apply(&SceneDelta { epoch: 1, ops }));
        assert_eq!(scene.lines().len(), 20_000);
        assert_eq!(scene.lines()[19_999].key, LineKey(20_000));
    }
}
