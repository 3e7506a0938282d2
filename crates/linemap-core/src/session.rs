// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Event-queue state machine over a [`SegmentStore`].
//!
//! Actions are handled one at a time, in arrival order. Each one runs to
//! completion, including the redraw it causes, before the next is taken.

use std::collections::VecDeque;

use linemap_port::{ApplyError, ScenePort};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scene::project;
use crate::settings::ViewerSettings;
use crate::store::SegmentStore;

/// User control.
///
/// Serialized in snake case, so a script reads
/// `[{"draw": "0 0 10 10 red"}, "fix", "unfix", "clear"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Parse the given text into `pending`.
    Draw(String),
    /// Same as drawing empty text.
    Clear,
    /// Promote `pending` into `fixed`.
    Fix,
    /// Discard `fixed`.
    Unfix,
}

/// One user session: store, queued actions and the render epoch.
#[derive(Debug, Clone)]
pub struct Session {
    store: SegmentStore,
    queue: VecDeque<Action>,
    epoch: u64,
    stroke_width: f64,
}

impl Session {
    /// Create an empty session styled by `settings`.
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            store: SegmentStore::new(),
            queue: VecDeque::new(),
            epoch: 0,
            stroke_width: settings.stroke.width,
        }
    }

    /// Current store state.
    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Epoch of the last presented frame (0 before the first one).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of actions waiting in the queue.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Queue an action for the next [`Session::pump`].
    pub fn enqueue(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    /// Apply one action to the store. Returns whether anything visible changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, "dispatch");
        match action {
            Action::Draw(text) => {
                self.store.draw(&text);
                true
            }
            Action::Clear => {
                self.store.draw("");
                true
            }
            Action::Fix => self.store.promote(),
            Action::Unfix => {
                let had_fixed = !self.store.fixed().is_empty();
                self.store.reset();
                had_fixed
            }
        }
    }

    /// Push the current state to `port` as a new epoch and render it.
    pub fn present<P>(&mut self, port: &mut P) -> Result<(), ApplyError>
    where
        P: ScenePort + ?Sized,
    {
        self.epoch += 1;
        let delta = project(&self.store, self.epoch, self.stroke_width);
        port.apply_scene_delta(&delta)?;
        port.set_error(self.store.error_message().as_deref());
        port.render()
    }

    /// Drain the queue in order, presenting after every action that changed
    /// the visible state. Returns the number of actions handled.
    ///
    /// On a port error the failing action counts as handled and the rest stay
    /// queued.
    pub fn pump<P>(&mut self, port: &mut P) -> Result<usize, ApplyError>
    where
        P: ScenePort + ?Sized,
    {
        let mut handled = 0;
        while let Some(action) = self.queue.pop_front() {
            handled += 1;
            if self.dispatch(action) {
                self.present(port)?;
            }
        }
        Ok(handled)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use linemap_adapters::MockAdapter;
    use linemap_port::LineKey;

    fn session() -> Session {
        Session::new(&ViewerSettings::default())
    }

    #[test]
    fn pump_handles_actions_in_order_and_renders_each() {
        let mut s = session();
        let mut port = MockAdapter::new();
        s.enqueue(Action::Draw("0 0 1 1 red".into()));
        s.enqueue(Action::Fix);
        s.enqueue(Action::Draw("0 0 2 2 blue".into()));

        assert_eq!(s.pump(&mut port).expect("pump"), 3);
        assert_eq!(s.queued(), 0);
        assert_eq!(port.render_count, 3);
        assert_eq!(port.last_epoch(), Some(3));
        assert_eq!(port.keys(), vec![LineKey(1), LineKey(2)]);
    }

    #[test]
    fn noop_fix_does_not_redraw() {
        let mut s = session();
        let mut port = MockAdapter::new();
        s.enqueue(Action::Fix);
        s.enqueue(Action::Unfix);
        assert_eq!(s.pump(&mut port).expect("pump"), 2);
        assert_eq!(port.render_count, 0);
        assert_eq!(s.epoch(), 0);
    }

    #[test]
    fn error_is_shown_then_cleared() {
        let mut s = session();
        let mut port = MockAdapter::new();
        s.enqueue(Action::Draw("0 0 1 1".into()));
        s.pump(&mut port).expect("pump");
        assert_eq!(
            port.error.as_deref(),
            Some("Error: Line 1 is expected to have 5 elements but not")
        );
        assert_eq!(port.line_count(), 0);

        s.enqueue(Action::Clear);
        s.pump(&mut port).expect("pump");
        assert!(port.error.is_none());
    }

    #[test]
    fn unfix_discards_fixed_lines_only() {
        let mut s = session();
        let mut port = MockAdapter::new();
        for action in [
            Action::Draw("0 0 1 1 red".into()),
            Action::Fix,
            Action::Draw("0 0 2 2 blue".into()),
            Action::Unfix,
        ] {
            s.enqueue(action);
        }
        s.pump(&mut port).expect("pump");
        assert_eq!(port.keys(), vec![LineKey(2)]);
        assert!(s.store().fixed().is_empty());
    }

    #[test]
    fn large_drawing_renders_every_line() {
        let mut s = session();
        let mut port = MockAdapter::new();
        s.enqueue(Action::Draw(vec!["0 0 10 10 red"; 10_000].join("\n")));
        s.enqueue(Action::Fix);
        s.enqueue(Action::Draw("5 5 6 6 blue".into()));

        assert_eq!(s.pump(&mut port).expect("pump"), 3);
        assert_eq!(s.store().fixed().len(), 10_000);
        assert_eq!(port.line_count(), 10_001);
        assert_eq!(port.keys().last(), Some(&LineKey(10_001)));
        assert!(port.error.is_none());
    }

    #[test]
    fn actions_deserialize_from_script() {
        let script: Vec<Action> =
            serde_json::from_str(r#"[{"draw":"0 0 1 1 red"},"fix","unfix","clear"]"#)
                .expect("script");
        assert_eq!(
            script,
            vec![
                Action::Draw("0 0 1 1 red".into()),
                Action::Fix,
                Action::Unfix,
                Action::Clear
            ]
        );
    }
}
