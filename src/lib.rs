//! # weft
//!
//! Character-span alignment simplification: compact word alignments without
//! changing what they mean.
//!
//! An upstream aligner relates two texts span by span - each correspondence a
//! quad of character offsets, `from_start, from_end, to_start, to_end`. Raw
//! output is noisy: symmetrization duplicates pairs, subword probing splits
//! words, and many pairs restate what neighboring pairs already say. weft
//! reduces such an alignment to the smallest equivalent set of span pairs:
//! select any span of one text and the aligned span(s) of the other text stay
//! exactly the same before and after.
//!
//! ```text
//! producer (model / external aligner)          weft
//! ┌──────────────────────────────┐   ┌──────────────────────────┐
//! │ Aligner::align(from, to)     │──▶│ validate + dedup + sort  │
//! │   → flat quads               │   │ merge to fixed point     │
//! │ (transpose / symmetrized)    │   │   or search exhaustively │
//! └──────────────────────────────┘   │ → minimal flat quads     │
//!                                    └──────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```
//! use weft::{Simplifier, Strategy};
//!
//! let from_text = "a b";
//! let to_text = "ab";
//! // Two separate words, both aligned to the whole of "ab".
//! let alignment = [0, 1, 0, 2, 2, 3, 0, 2];
//!
//! let simplified = Strategy::default().simplify(&alignment, from_text, to_text)?;
//! // The gap between the words is pure whitespace, so one pair suffices.
//! assert_eq!(simplified, vec![0, 3, 0, 2]);
//! # Ok::<(), weft::Error>(())
//! ```
//!
//! ## Strategies
//!
//! | Strategy | Guarantee | Cost | Use when |
//! |----------|-----------|------|----------|
//! | [`FastSimplifier`] | fixed point of the merge rule | O(n³), milliseconds | always, by default |
//! | [`OptimalSimplifier`] | fewest pairs reachable | exponential, minutes on big inputs | input is small and minimality matters |
//!
//! The fast strategy is not guaranteed minimal: greedy merge order can
//! strand a criss-cross pattern at three pairs where one exists. That gap is
//! documented, tested behavior - downstream consumers depend on the fast
//! strategy's exact output, so it must not be "fixed" to chase the optimal
//! result. Pick per call via [`Strategy`].
//!
//! ## Design notes
//!
//! - **Offsets count characters**, never bytes; producers that work in bytes
//!   must convert before handing off.
//! - **Pure computation**: no I/O, no shared state; simplifiers are
//!   `Send + Sync` and calls on independent inputs can run concurrently.
//! - **Strict input**: ragged quads, empty spans, and out-of-bounds offsets
//!   are [`Error`]s, never repaired - repair would silently change the
//!   alignment's meaning.

#![warn(missing_docs)]

pub mod align;
pub mod error;
pub mod merge;
pub mod pair;
pub mod simplify;
pub mod text;

use serde::{Deserialize, Serialize};

// =============================================================================
// Sealed Trait Pattern
// =============================================================================
//
// Simplifier is sealed: the two strategies are the contract, and generic code
// relies on their shared invariants (validated input, canonical sorted
// output). Producers get the opposite treatment - the Aligner trait in
// `align` is open for downstream implementations.

mod sealed {
    /// Sealed trait marker. Cannot be implemented outside this crate.
    pub trait Sealed {}

    impl Sealed for super::FastSimplifier {}
    impl Sealed for super::OptimalSimplifier {}
    impl Sealed for super::Strategy {}
}

/// Trait for simplification strategies.
///
/// Both implementations consume a flat quad sequence plus the two backing
/// texts and return the flattened minimal pair set, sorted, with no
/// duplicates and no two pairs still eligible to merge.
///
/// # Sealed trait
///
/// This trait is **sealed** - only the strategies defined in this crate
/// implement it. The merge rule is the whole contract; a third-party
/// "strategy" with different semantics would silently break the
/// projection-preservation guarantee callers rely on. Code that needs a
/// custom alignment producer implements [`align::Aligner`] instead.
pub trait Simplifier: sealed::Sealed + Send + Sync {
    /// Simplify a flat alignment against its two texts.
    ///
    /// # Errors
    ///
    /// Fails if the alignment length is not a multiple of four, or any span
    /// is empty, inverted, or out of bounds for its text (character count).
    fn simplify(&self, alignment: &[usize], from_text: &str, to_text: &str)
        -> Result<Vec<usize>>;

    /// Name of this strategy.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// One-line description of this strategy.
    fn description(&self) -> &'static str {
        "Unknown simplification strategy"
    }
}

/// Strategy selection, for callers configured by value rather than by type.
///
/// # Example
///
/// ```
/// use weft::{Simplifier, Strategy};
///
/// let strategy = Strategy::recommended(3);
/// assert_eq!(strategy, Strategy::Optimal);
/// assert_eq!(strategy.name(), "optimal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Greedy fixed-point merging ([`FastSimplifier`]). The default.
    #[default]
    Fast,
    /// Exhaustive search ([`OptimalSimplifier`]). Small inputs only.
    Optimal,
}

/// Largest pair count for which [`Strategy::recommended`] picks the
/// exhaustive strategy. Past this size the search state space routinely
/// reaches minutes of CPU time.
const OPTIMAL_PAIR_LIMIT: usize = 8;

impl Strategy {
    /// Pick a strategy by input size: exhaustive when the deduplicated pair
    /// count is small enough to search completely, greedy otherwise.
    #[must_use]
    pub const fn recommended(pair_count: usize) -> Self {
        if pair_count <= OPTIMAL_PAIR_LIMIT {
            Strategy::Optimal
        } else {
            Strategy::Fast
        }
    }
}

impl Simplifier for Strategy {
    fn simplify(&self, alignment: &[usize], from_text: &str, to_text: &str)
        -> Result<Vec<usize>> {
        match self {
            Strategy::Fast => FastSimplifier::new().simplify(alignment, from_text, to_text),
            Strategy::Optimal => OptimalSimplifier::new().simplify(alignment, from_text, to_text),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Strategy::Fast => "fast",
            Strategy::Optimal => "optimal",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Strategy::Fast => FastSimplifier.description(),
            Strategy::Optimal => OptimalSimplifier.description(),
        }
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```
    //! use weft::prelude::*;
    //!
    //! let simplified = FastSimplifier::new()
    //!     .simplify(&[0, 1, 0, 1, 0, 1, 0, 1], "a", "a")
    //!     .unwrap();
    //! assert_eq!(simplified, vec![0, 1, 0, 1]);
    //! ```
    pub use crate::align::{Aligner, MockAligner, Segmenter};
    pub use crate::error::{Error, Result, Side};
    pub use crate::pair::SpanPair;
    pub use crate::{FastSimplifier, OptimalSimplifier, Simplifier, Strategy};
}

// Re-exports
pub use align::{Aligner, MockAligner, Segmenter, WhitespaceSegmenter};
pub use error::{Error, Result, Side};
pub use merge::{joinable, merge};
pub use pair::{pairs_from_flat, pairs_to_flat, SpanPair};
pub use simplify::{FastSimplifier, OptimalSimplifier};
pub use text::TextView;
