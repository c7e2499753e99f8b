//! Error types for weft.
//!
//! Every variant is an input-validation failure. Simplification itself cannot
//! fail: once an alignment passes validation, a call either returns a fully
//! simplified set or keeps searching, never a partial result. Malformed input
//! is surfaced to the caller rather than repaired, since dropping or clamping
//! a span would change what the alignment means.

use thiserror::Error;

/// Result type for weft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two texts a span indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The "from" text (first two offsets of a quad).
    From,
    /// The "to" text (last two offsets of a quad).
    To,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}

/// Error type for weft operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Flat alignment length is not a multiple of four.
    #[error("alignment has {len} values, expected a multiple of 4")]
    RaggedAlignment {
        /// Length of the offending flat sequence.
        len: usize,
    },

    /// A span with `start >= end`. Alignments never contain empty or
    /// inverted ranges.
    #[error("{side} span {start}..{end} is empty or inverted")]
    EmptySpan {
        /// Side of the offending span.
        side: Side,
        /// Start offset (inclusive).
        start: usize,
        /// End offset (exclusive).
        end: usize,
    },

    /// A span extending past the end of its text, measured in characters.
    #[error("{side} span {start}..{end} is out of bounds for a text of {len} characters")]
    SpanOutOfBounds {
        /// Side of the offending span.
        side: Side,
        /// Start offset (inclusive).
        start: usize,
        /// End offset (exclusive).
        end: usize,
        /// Character count of the text on that side.
        len: usize,
    },
}

impl Error {
    /// Create a ragged-alignment error.
    pub fn ragged(len: usize) -> Self {
        Error::RaggedAlignment { len }
    }

    /// Create an empty-span error.
    pub fn empty_span(side: Side, start: usize, end: usize) -> Self {
        Error::EmptySpan { side, start, end }
    }

    /// Create an out-of-bounds error.
    pub fn out_of_bounds(side: Side, start: usize, end: usize, len: usize) -> Self {
        Error::SpanOutOfBounds {
            side,
            start,
            end,
            len,
        }
    }
}
