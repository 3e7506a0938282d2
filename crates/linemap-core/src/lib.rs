// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core of Line Mapper: turns a typed line list into drawable segments and
//! tracks which of them the user has fixed.
//!
//! - [`parse`] validates raw text line by line and stops at the first bad line.
//! - [`SegmentStore`] holds the `pending` (latest parse) and `fixed`
//!   (promoted) partitions.
//! - [`Session`] drives the store from a queue of [`Action`]s and projects the
//!   result onto a [`linemap_port::ScenePort`].
//!
//! Nothing here knows about a UI framework; adapters stay thin.

pub mod config;
pub mod parse;
pub mod scene;
pub mod segment;
pub mod session;
pub mod settings;
pub mod store;

pub use parse::{parse, ParseError, ParseErrorKind, ParseResult};
pub use segment::{Segment, SegmentId};
pub use session::{Action, Session};
pub use settings::ViewerSettings;
pub use store::SegmentStore;
