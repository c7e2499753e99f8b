//! Greedy fixed-point simplification.
//!
//! Scans every unordered pair of live alignments, merges in place wherever
//! the merge rule allows, and repeats until a full pass changes nothing.
//! Each successful merge removes one pair from the live set, so the loop
//! terminates after at most n shrinking passes - O(n³) in the worst case,
//! milliseconds on real sentence pairs.
//!
//! # Known limitation
//!
//! The greedy order commits to merges that can block better ones. On a
//! three-way criss-cross input (every span of one text aligned to the whole
//! of the other) it stops at three pairs where a single pair exists; see
//! [`OptimalSimplifier`](super::OptimalSimplifier) for the exhaustive search
//! that finds it. Downstream consumers rely on this strategy's exact output,
//! so the gap is pinned by tests rather than papered over.

use crate::error::Result;
use crate::merge::merge;
use crate::pair::{pairs_to_flat, SpanPair};
use crate::text::TextView;
use crate::Simplifier;

/// The polynomial-time simplification strategy.
///
/// # Example
///
/// ```
/// use weft::{FastSimplifier, Simplifier};
///
/// let from_text = "two words";
/// let to_text = "zwei Wörter";
/// // "words" arrives split across "Wör" / "ter"; duplicates come from
/// // symmetrization.
/// let alignment = [0, 3, 0, 4, 0, 3, 0, 4, 4, 9, 5, 8, 4, 9, 8, 11];
///
/// let simplified = FastSimplifier::new()
///     .simplify(&alignment, from_text, to_text)
///     .unwrap();
/// assert_eq!(simplified, vec![0, 3, 0, 4, 4, 9, 5, 11]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FastSimplifier;

impl FastSimplifier {
    /// Create a fast simplifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Simplifier for FastSimplifier {
    fn simplify(&self, alignment: &[usize], from_text: &str, to_text: &str) -> Result<Vec<usize>> {
        let from = TextView::new(from_text);
        let to = TextView::new(to_text);
        let pairs = super::normalize(alignment, &from, &to)?;

        Ok(pairs_to_flat(&run(pairs, &from, &to)))
    }

    fn name(&self) -> &'static str {
        "fast"
    }

    fn description(&self) -> &'static str {
        "Greedy fixed-point pairwise merging; polynomial time, not guaranteed minimal"
    }
}

/// Merge to a fixed point over a deduplicated, sorted working set.
pub(crate) fn run(mut pairs: Vec<SpanPair>, from_text: &TextView, to_text: &TextView) -> Vec<SpanPair> {
    let input_len = pairs.len();
    let mut passes = 0usize;

    loop {
        passes += 1;
        // Removal is tracked by index, not value: a merge can leave the
        // surviving pair equal to another live pair, and those two must stay
        // distinct until their own merge runs.
        let mut removed = vec![false; pairs.len()];
        let mut merged_any = false;

        for i in 0..pairs.len() {
            if removed[i] {
                continue;
            }
            for j in (i + 1)..pairs.len() {
                if removed[j] {
                    continue;
                }
                if let Some(merged) = merge(pairs[i], pairs[j], from_text, to_text) {
                    pairs[i] = merged;
                    removed[j] = true;
                    merged_any = true;
                }
            }
        }

        if !merged_any {
            break;
        }
        pairs = pairs
            .into_iter()
            .zip(removed)
            .filter_map(|(pair, gone)| (!gone).then_some(pair))
            .collect();
    }

    pairs.sort_unstable();
    log::debug!(
        "fast simplify: {} -> {} pairs in {} passes",
        input_len,
        pairs.len(),
        passes
    );
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simplify(pairs: &[SpanPair], from: &str, to: &str) -> Vec<SpanPair> {
        run(pairs.to_vec(), &TextView::new(from), &TextView::new(to))
    }

    #[test]
    fn containment_keeps_the_container() {
        let out = simplify(
            &[SpanPair::new(0, 1, 0, 1), SpanPair::new(0, 2, 0, 2)],
            "ab",
            "ab",
        );
        assert_eq!(out, vec![SpanPair::new(0, 2, 0, 2)]);
    }

    #[test]
    fn chain_of_adjacent_pieces_collapses() {
        // Four single-char pieces of the same from-word.
        let out = simplify(
            &[
                SpanPair::new(0, 1, 0, 1),
                SpanPair::new(0, 1, 1, 2),
                SpanPair::new(0, 1, 2, 3),
                SpanPair::new(0, 1, 3, 4),
            ],
            "a",
            "abcd",
        );
        assert_eq!(out, vec![SpanPair::new(0, 1, 0, 4)]);
    }

    #[test]
    fn merged_value_equal_to_live_value_survives() {
        // Merging the first two produces (0,2,0,2), equal to the third.
        // Index-keyed removal must keep exactly one copy.
        let out = simplify(
            &[
                SpanPair::new(0, 1, 0, 2),
                SpanPair::new(0, 2, 0, 2),
                SpanPair::new(1, 2, 0, 2),
            ],
            "ab",
            "ab",
        );
        assert_eq!(out, vec![SpanPair::new(0, 2, 0, 2)]);
    }

    #[test]
    fn disjoint_pairs_untouched() {
        let input = vec![SpanPair::new(0, 1, 0, 1), SpanPair::new(2, 3, 2, 3)];
        let out = simplify(&input, "axb", "ayb");
        assert_eq!(out, input);
    }

    #[test]
    fn empty_input() {
        assert!(simplify(&[], "", "").is_empty());
    }
}
