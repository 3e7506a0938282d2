// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed/pending segment store.
//!
//! Invariants:
//!
//! - `pending` is replaced wholesale by every parse and emptied by promotion.
//! - `fixed` only grows (promotion) or is emptied wholesale (reset).
//! - Ids across `fixed ++ pending` are strictly increasing and never reused
//!   within one store, even after a reset. `last_id` is carried explicitly and
//!   only ever moves forward.

use tracing::debug;

use crate::parse::{parse, ParseError, ParseResult};
use crate::segment::{Segment, SegmentId};

/// Two-partition segment store driven by parse results and Fix/Unfix.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    fixed: Vec<Segment>,
    pending: Vec<Segment>,
    last_error: Option<ParseError>,
    last_id: SegmentId,
}

impl SegmentStore {
    /// Create an empty store. The first parsed segment gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id base for the next parse: segments get `start_id() + line`.
    pub fn start_id(&self) -> SegmentId {
        self.last_id
    }

    /// Id the first line of the next parse will receive.
    pub fn next_id(&self) -> SegmentId {
        self.last_id + 1
    }

    /// Promoted segments, in promotion order.
    pub fn fixed(&self) -> &[Segment] {
        &self.fixed
    }

    /// Segments from the latest successful parse.
    pub fn pending(&self) -> &[Segment] {
        &self.pending
    }

    /// Error recorded by the latest parse, if it failed.
    pub fn last_error(&self) -> Option<ParseError> {
        self.last_error
    }

    /// Inline message for the recorded error, e.g.
    /// `Error: Line 2 is expected to have 5 elements but not`.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.map(|err| format!("Error: {err}"))
    }

    /// What a renderer shows: `fixed` followed by `pending`.
    pub fn visible(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.fixed.iter().chain(self.pending.iter())
    }

    /// Parse `text` with this store's id base and apply the result.
    pub fn draw(&mut self, text: &str) {
        let result = parse(text, self.start_id());
        self.on_parse(result);
    }

    /// Apply a parse result. Never touches `fixed`.
    pub fn on_parse(&mut self, result: ParseResult) {
        match result {
            ParseResult::Parsed(segments) => {
                debug!(count = segments.len(), "pending replaced");
                self.pending = segments;
                self.last_error = None;
            }
            ParseResult::Empty => {
                debug!("pending cleared");
                self.pending.clear();
                self.last_error = None;
            }
            ParseResult::Invalid(err) => {
                debug!(line = err.line(), kind = ?err.kind(), "parse rejected");
                self.pending.clear();
                self.last_error = Some(err);
            }
        }
    }

    /// Move every pending segment to the end of `fixed`.
    ///
    /// No-op (returns `false`) while an error is shown or nothing is pending.
    pub fn promote(&mut self) -> bool {
        if self.last_error.is_some() || self.pending.is_empty() {
            return false;
        }
        if let Some(last) = self.pending.last() {
            self.last_id = self.last_id.max(last.id);
        }
        debug!(count = self.pending.len(), last_id = self.last_id, "promoted");
        self.fixed.append(&mut self.pending);
        true
    }

    /// Discard every fixed segment. `pending`, the error and the id base are
    /// left as they are; discarded segments are not moved back to `pending`.
    pub fn reset(&mut self) {
        debug!(count = self.fixed.len(), "fixed discarded");
        self.fixed.clear();
    }
}
