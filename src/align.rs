//! The producer side of the alignment pipeline.
//!
//! Raw alignments come from somewhere else - a question-answering model
//! probed token by token, an external word aligner, a hand-written fixture.
//! This module defines the seams those producers plug into and the flat-level
//! helpers they share, so the simplifiers never depend on tokenization or
//! inference machinery:
//!
//! - [`Aligner`]: `(from_text, to_text)` → flat alignment. Deliberately
//!   **unsealed**, unlike [`Simplifier`](crate::Simplifier) - producers are
//!   expected to live in downstream crates next to their models.
//! - [`Segmenter`]: text → token character ranges, for producers that probe
//!   one token at a time.
//! - [`transpose`] / [`symmetrized`] / [`dedup`]: the flat-sequence plumbing
//!   for running an aligner in both directions and combining the passes.
//!
//! The simplifiers tolerate duplicated and unsorted pairs regardless, so
//! producers may apply or skip these helpers freely.

use std::collections::HashSet;
use std::ops::Range;

use crate::error::{Error, Result};

/// Produces token character ranges for one text.
///
/// Token boundaries only mark what gets probed for alignment; consumers of
/// the resulting alignment never need them back.
pub trait Segmenter {
    /// Character ranges of the tokens of `text`, in order.
    fn segment(&self, text: &str) -> Result<Vec<Range<usize>>>;
}

/// Produces a raw character-span alignment for a text pair.
///
/// Implementations wrap whatever does the actual aligning. The contract is
/// only about shape: a flat sequence of `from_start, from_end, to_start,
/// to_end` quads indexing characters of the two texts.
pub trait Aligner: Send + Sync {
    /// Align `from_text` against `to_text`.
    fn align(&self, from_text: &str, to_text: &str) -> Result<Vec<usize>>;

    /// Name of this aligner.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// One-line description of this aligner.
    fn description(&self) -> &'static str {
        "Unknown aligner"
    }
}

/// Splits on whitespace runs.
///
/// The no-dependency baseline segmenter: every maximal run of
/// non-whitespace characters is one token. Real producers substitute a
/// language-aware tokenizer; tests and benchmarks get word boundaries for
/// free.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl WhitespaceSegmenter {
    /// Create a whitespace segmenter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Range<usize>>> {
        let mut ranges = Vec::new();
        let mut start = None;

        for (i, c) in text.chars().enumerate() {
            match (start, c.is_whitespace()) {
                (None, false) => start = Some(i),
                (Some(s), true) => {
                    ranges.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            ranges.push(s..text.chars().count());
        }

        Ok(ranges)
    }
}

/// A fixed-output aligner for tests and examples.
///
/// # Example
///
/// ```
/// use weft::{Aligner, MockAligner};
///
/// let aligner = MockAligner::new("fixture")
///     .with_alignment(vec![0, 3, 0, 4]);
///
/// assert_eq!(aligner.align("two", "zwei").unwrap(), vec![0, 3, 0, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct MockAligner {
    name: &'static str,
    alignment: Vec<usize>,
}

impl MockAligner {
    /// Create a mock aligner that returns an empty alignment.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            alignment: Vec::new(),
        }
    }

    /// Set the alignment to return.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Vec<usize>) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Aligner for MockAligner {
    fn align(&self, _from_text: &str, _to_text: &str) -> Result<Vec<usize>> {
        Ok(self.alignment.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock aligner for testing"
    }
}

/// Swap the from-side and to-side of every quad.
///
/// An aligner run with its arguments swapped yields quads in `(to, from)`
/// orientation; transposing restores them to the canonical one. Fails with
/// [`Error::RaggedAlignment`] if the sequence is not quad-shaped.
pub fn transpose(alignment: &[usize]) -> Result<Vec<usize>> {
    if alignment.len() % 4 != 0 {
        return Err(Error::ragged(alignment.len()));
    }

    let mut out = Vec::with_capacity(alignment.len());
    for quad in alignment.chunks_exact(4) {
        out.extend_from_slice(&[quad[2], quad[3], quad[0], quad[1]]);
    }
    Ok(out)
}

/// Drop duplicate quads, keeping first occurrences in order.
pub fn dedup(alignment: &[usize]) -> Result<Vec<usize>> {
    if alignment.len() % 4 != 0 {
        return Err(Error::ragged(alignment.len()));
    }

    let mut seen: HashSet<[usize; 4]> = HashSet::new();
    let mut out = Vec::with_capacity(alignment.len());
    for quad in alignment.chunks_exact(4) {
        if seen.insert([quad[0], quad[1], quad[2], quad[3]]) {
            out.extend_from_slice(quad);
        }
    }
    Ok(out)
}

/// Combine a forward pass and a reverse pass into one symmetric alignment.
///
/// `reverse` must be the output of aligning with the texts swapped; it is
/// transposed back into canonical orientation, appended to `forward`, and
/// deduplicated. Either input may be empty.
///
/// # Example
///
/// ```
/// use weft::align::symmetrized;
///
/// let forward = [0, 3, 0, 4];
/// // The reverse pass found the same correspondence, plus one more.
/// let reverse = [0, 4, 0, 3, 5, 11, 4, 9];
///
/// let combined = symmetrized(&forward, &reverse).unwrap();
/// assert_eq!(combined, vec![0, 3, 0, 4, 4, 9, 5, 11]);
/// ```
pub fn symmetrized(forward: &[usize], reverse: &[usize]) -> Result<Vec<usize>> {
    if forward.len() % 4 != 0 {
        return Err(Error::ragged(forward.len()));
    }

    let mut combined = forward.to_vec();
    combined.extend(transpose(reverse)?);
    dedup(&combined)
}
