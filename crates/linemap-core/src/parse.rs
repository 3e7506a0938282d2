// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line-list parser.
//!
//! Grammar: one segment per line, `<x1> <y1> <x2> <y2> <color>`, fields
//! separated by runs of whitespace. Coordinates are numbers in `[0, 4000]`;
//! the color is any token that is not itself a number. What counts as a
//! number matches the browser's `Number()` conversion, so a drawing pasted
//! into the page and one checked on the command line agree.
//!
//! Parsing stops at the first bad line. Later lines are neither checked nor
//! reported.

use linemap_port::PLANE_EXTENT;
use thiserror::Error;

use crate::segment::{Segment, SegmentId};

/// Number of whitespace-separated fields on every line.
pub const FIELDS_PER_LINE: usize = 5;

/// Smallest accepted coordinate.
pub const COORD_MIN: f64 = 0.0;

/// Largest accepted coordinate.
pub const COORD_MAX: f64 = PLANE_EXTENT;

/// Why a line was rejected. `Display` yields the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not split into exactly five tokens.
    #[error("Line {line} is expected to have 5 elements but not")]
    MalformedFieldCount {
        /// 1-based line number in the raw input (blank lines count).
        line: usize,
    },
    /// A coordinate is non-numeric or out of range, or the color is numeric.
    #[error("Line {line} is expecting four numbers from 0 to 4000 and one color string but not")]
    InvalidFieldValue {
        /// 1-based line number in the raw input (blank lines count).
        line: usize,
    },
}

/// Field-free tag of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// See [`ParseError::MalformedFieldCount`].
    MalformedFieldCount,
    /// See [`ParseError::InvalidFieldValue`].
    InvalidFieldValue,
}

impl ParseError {
    /// Error kind without the line number.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MalformedFieldCount { .. } => ParseErrorKind::MalformedFieldCount,
            Self::InvalidFieldValue { .. } => ParseErrorKind::InvalidFieldValue,
        }
    }

    /// 1-based line that failed.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedFieldCount { line } | Self::InvalidFieldValue { line } => *line,
        }
    }
}

/// Outcome of [`parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Every line was valid; segments in input order.
    Parsed(Vec<Segment>),
    /// The input was the empty string.
    Empty,
    /// The first offending line.
    Invalid(ParseError),
}

/// Parse `text` into segments numbered `start_id + 1, start_id + 2, …`.
///
/// Lines are split on `\n`; a trailing `\r` is whitespace, so CRLF input
/// parses the same. A blank or whitespace-only line has zero fields and is
/// rejected, which includes the empty line after a trailing newline.
pub fn parse(text: &str, start_id: SegmentId) -> ParseResult {
    if text.is_empty() {
        return ParseResult::Empty;
    }

    let mut segments = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        match parse_line(raw, idx + 1, start_id) {
            Ok(segment) => segments.push(segment),
            Err(err) => return ParseResult::Invalid(err),
        }
    }
    ParseResult::Parsed(segments)
}

fn parse_line(raw: &str, line: usize, start_id: SegmentId) -> Result<Segment, ParseError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [x1, y1, x2, y2, color] = fields.as_slice() else {
        return Err(ParseError::MalformedFieldCount { line });
    };

    let invalid = || ParseError::InvalidFieldValue { line };
    let x1 = coordinate(x1).ok_or_else(invalid)?;
    let y1 = coordinate(y1).ok_or_else(invalid)?;
    let x2 = coordinate(x2).ok_or_else(invalid)?;
    let y2 = coordinate(y2).ok_or_else(invalid)?;
    if number(color).is_some() {
        return Err(invalid());
    }

    Ok(Segment {
        id: start_id + line as SegmentId,
        x1,
        y1,
        x2,
        y2,
        color: (*color).to_string(),
    })
}

/// Numeric value of `token`, following the browser's `Number()` conversion.
///
/// Decimal literals (`12`, `-0.5`, `.5`, `1e3`) and the exact spellings
/// `Infinity`, `+Infinity` and `-Infinity` are numbers, as are unsigned
/// `0x`/`0o`/`0b` integer literals. Everything else, `inf` and `nan` included,
/// is not.
fn number(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned == "Infinity" {
        return Some(if token.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    // Rust's float parser also takes `inf`/`infinity`/`nan` in any case; those
    // all start with a letter.
    radix_literal(token).or_else(|| {
        unsigned
            .starts_with(|c: char| c.is_ascii_digit() || c == '.')
            .then(|| token.parse().ok())
            .flatten()
    })
}

/// `0x1F`, `0o17`, `0b101` (prefix in either case, no sign, no separators).
fn radix_literal(token: &str) -> Option<f64> {
    let radix = match token.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = token.get(2..).filter(|d| !d.is_empty())?;
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

fn coordinate(token: &str) -> Option<f64> {
    number(token).filter(|v| (COORD_MIN..=COORD_MAX).contains(v))
}
