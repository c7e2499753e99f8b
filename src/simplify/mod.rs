//! The two simplification strategies.
//!
//! Both take the same input (a flat alignment plus the two backing texts) and
//! honor the same contract: the output expresses exactly the correspondences
//! of the input in as few pairs as the strategy can find, with no duplicates
//! and no two pairs still eligible to merge. They differ only in how hard
//! they look:
//!
//! | Strategy | Result | Cost |
//! |----------|--------|------|
//! | [`FastSimplifier`] | local fixed point, usually minimal in practice | O(n³) worst case, milliseconds |
//! | [`OptimalSimplifier`] | guaranteed minimal | exponential, minutes on non-trivial inputs |

pub mod fast;
pub mod optimal;

pub use fast::FastSimplifier;
pub use optimal::OptimalSimplifier;

use std::collections::BTreeSet;

use crate::error::Result;
use crate::pair::{pairs_from_flat, SpanPair};
use crate::text::TextView;

/// Validate a flat alignment against its texts and collapse it into a
/// deduplicated, sorted working set.
///
/// Symmetrized producer output routinely contains the same pair twice (once
/// per direction), so duplicates are expected, not an error.
pub(crate) fn normalize(
    alignment: &[usize],
    from_text: &TextView,
    to_text: &TextView,
) -> Result<Vec<SpanPair>> {
    let pairs = pairs_from_flat(alignment)?;
    for pair in &pairs {
        pair.validate(from_text.len(), to_text.len())?;
    }

    let set: BTreeSet<SpanPair> = pairs.into_iter().collect();
    Ok(set.into_iter().collect())
}
