//! The span-pair data model.
//!
//! A [`SpanPair`] is the unit of alignment: one character range of the
//! from-text tied to one character range of the to-text. Upstream aligners
//! produce these as a flat integer sequence (four offsets per pair, in
//! `from_start, from_end, to_start, to_end` order) so that no knowledge of
//! tokenization is needed to consume an alignment; the codec functions at the
//! bottom of this module convert between that wire shape and `SpanPair`
//! values.
//!
//! All offsets are **character** offsets, not byte offsets. See
//! [`TextView`](crate::TextView) for how texts are indexed.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result, Side};

/// One aligned pair of character ranges.
///
/// The half-open range `[from_start, from_end)` of the from-text corresponds
/// to `[to_start, to_end)` of the to-text. Both ranges are always non-empty;
/// the flat codec and the simplifiers reject empty or inverted ranges at the
/// boundary.
///
/// `SpanPair` is a plain value: equality, hashing, and ordering are
/// structural, with ordering lexicographic over the four fields in
/// declaration order. That ordering is what makes deduplication cheap and
/// output deterministic.
///
/// # Example
///
/// ```
/// use weft::SpanPair;
///
/// let pair = SpanPair::new(0, 3, 5, 11);
/// assert_eq!(pair.from_range(), 0..3);
/// assert_eq!(pair.to_range(), 5..11);
/// assert_eq!(pair.total_len(), 9);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SpanPair {
    /// Character offset into the from-text (start, inclusive).
    pub from_start: usize,
    /// Character offset into the from-text (end, exclusive).
    pub from_end: usize,
    /// Character offset into the to-text (start, inclusive).
    pub to_start: usize,
    /// Character offset into the to-text (end, exclusive).
    pub to_end: usize,
}

impl SpanPair {
    /// Create a new span pair.
    #[must_use]
    pub const fn new(from_start: usize, from_end: usize, to_start: usize, to_end: usize) -> Self {
        Self {
            from_start,
            from_end,
            to_start,
            to_end,
        }
    }

    /// Range covered on the from-text side.
    #[must_use]
    pub const fn from_range(&self) -> Range<usize> {
        self.from_start..self.from_end
    }

    /// Range covered on the to-text side.
    #[must_use]
    pub const fn to_range(&self) -> Range<usize> {
        self.to_start..self.to_end
    }

    /// Length of the from-text range, in characters.
    #[must_use]
    pub const fn from_len(&self) -> usize {
        self.from_end.saturating_sub(self.from_start)
    }

    /// Length of the to-text range, in characters.
    #[must_use]
    pub const fn to_len(&self) -> usize {
        self.to_end.saturating_sub(self.to_start)
    }

    /// Summed length of both ranges.
    ///
    /// Used by the optimal simplifier as a tie-break between results with the
    /// same pair count: tighter spans render more cleanly.
    #[must_use]
    pub const fn total_len(&self) -> usize {
        self.from_len() + self.to_len()
    }

    /// Whether `other` lies entirely within `self` on both sides.
    ///
    /// A contained pair adds no information: any position it covers is
    /// already covered by the container, and it points into a subset of the
    /// container's opposite range.
    #[must_use]
    pub const fn contains(&self, other: &SpanPair) -> bool {
        other.from_start >= self.from_start
            && other.from_end <= self.from_end
            && other.to_start >= self.to_start
            && other.to_end <= self.to_end
    }

    /// The same correspondence read in the opposite direction.
    ///
    /// Swaps the from-range and to-range. Aligning in reverse and transposing
    /// the result is how producers build symmetric alignments; see
    /// [`transpose`](crate::align::transpose) for the flat-sequence form.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            from_start: self.to_start,
            from_end: self.to_end,
            to_start: self.from_start,
            to_end: self.from_end,
        }
    }

    /// Validate this pair against the character counts of the two texts.
    pub(crate) fn validate(&self, from_len: usize, to_len: usize) -> Result<()> {
        if self.from_start >= self.from_end {
            return Err(Error::empty_span(Side::From, self.from_start, self.from_end));
        }
        if self.to_start >= self.to_end {
            return Err(Error::empty_span(Side::To, self.to_start, self.to_end));
        }
        if self.from_end > from_len {
            return Err(Error::out_of_bounds(
                Side::From,
                self.from_start,
                self.from_end,
                from_len,
            ));
        }
        if self.to_end > to_len {
            return Err(Error::out_of_bounds(
                Side::To,
                self.to_start,
                self.to_end,
                to_len,
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for SpanPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}-{}..{}",
            self.from_start, self.from_end, self.to_start, self.to_end
        )
    }
}

/// Group a flat offset sequence into span pairs.
///
/// The sequence must hold four offsets per pair. Fails with
/// [`Error::RaggedAlignment`] on any other length and with
/// [`Error::EmptySpan`] if any range has `start >= end`. Bounds against the
/// backing texts are checked separately, where the texts are known.
///
/// # Example
///
/// ```
/// use weft::{pairs_from_flat, SpanPair};
///
/// let pairs = pairs_from_flat(&[0, 3, 5, 11]).unwrap();
/// assert_eq!(pairs, vec![SpanPair::new(0, 3, 5, 11)]);
/// ```
pub fn pairs_from_flat(alignment: &[usize]) -> Result<Vec<SpanPair>> {
    if alignment.len() % 4 != 0 {
        return Err(Error::ragged(alignment.len()));
    }

    alignment
        .chunks_exact(4)
        .map(|quad| {
            let pair = SpanPair::new(quad[0], quad[1], quad[2], quad[3]);
            // Shape-level validation only; usize::MAX stands in for the
            // unknown text lengths.
            pair.validate(usize::MAX, usize::MAX)?;
            Ok(pair)
        })
        .collect()
}

/// Flatten span pairs back into the wire shape.
#[must_use]
pub fn pairs_to_flat(pairs: &[SpanPair]) -> Vec<usize> {
    let mut flat = Vec::with_capacity(pairs.len() * 4);
    for pair in pairs {
        flat.extend_from_slice(&[pair.from_start, pair.from_end, pair.to_start, pair.to_end]);
    }
    flat
}
