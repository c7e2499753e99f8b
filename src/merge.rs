//! The merge rule shared by both simplification strategies.
//!
//! Two span pairs may be combined into one exactly when doing so changes
//! nothing about which content either text selects:
//!
//! - one pair is entirely contained within the other on both sides, or
//! - both cover the same range on one side, and their ranges on the other
//!   side overlap, touch, or are separated only by whitespace.
//!
//! The whitespace case is what lets word-by-word alignments collapse across
//! ordinary inter-word spacing. It is not a general "close enough" rule: a
//! gap containing any non-whitespace character is never merged, because the
//! merged span would claim characters the inputs never aligned.

use crate::pair::SpanPair;
use crate::text::TextView;

/// Try to combine two pairs into one equivalent pair.
///
/// Returns the merged pair when one of the eligible cases applies, `None`
/// otherwise. The cases are mutually exclusive for valid inputs; they are
/// checked in the order given for clarity, not tie-breaking.
///
/// # Example
///
/// ```
/// use weft::{merge, SpanPair, TextView};
///
/// let from = TextView::new("a");
/// let to = TextView::new("a b");
///
/// // Same from-range, to-ranges split by one space: merges across the gap.
/// let left = SpanPair::new(0, 1, 0, 1);
/// let right = SpanPair::new(0, 1, 2, 3);
/// assert_eq!(merge(left, right, &from, &to), Some(SpanPair::new(0, 1, 0, 3)));
/// ```
#[must_use]
pub fn merge(
    left: SpanPair,
    right: SpanPair,
    from_text: &TextView,
    to_text: &TextView,
) -> Option<SpanPair> {
    // Containment on both sides: the container already says everything the
    // contained pair says.
    if right.contains(&left) {
        return Some(right);
    }
    if left.contains(&right) {
        return Some(left);
    }

    // Identical from-range: the to-ranges may be joinable.
    if left.from_start == right.from_start
        && left.from_end == right.from_end
        && joinable(left.to_start, left.to_end, right.to_start, right.to_end, to_text)
    {
        return Some(SpanPair::new(
            left.from_start,
            left.from_end,
            left.to_start.min(right.to_start),
            left.to_end.max(right.to_end),
        ));
    }

    // Identical to-range: the from-ranges may be joinable.
    if left.to_start == right.to_start
        && left.to_end == right.to_end
        && joinable(
            left.from_start,
            left.from_end,
            right.from_start,
            right.from_end,
            from_text,
        )
    {
        return Some(SpanPair::new(
            left.from_start.min(right.from_start),
            left.from_end.max(right.from_end),
            left.to_start,
            left.to_end,
        ));
    }

    None
}

/// Whether `[s1, e1)` and `[s2, e2)` overlap, touch, or are separated only by
/// whitespace in `text`.
#[must_use]
pub fn joinable(s1: usize, e1: usize, s2: usize, e2: usize, text: &TextView) -> bool {
    if e1 < s2 {
        text.is_blank_between(e1, s2)
    } else if s1 > e2 {
        text.is_blank_between(e2, s1)
    } else {
        // e1 >= s2 && s1 <= e2: the ranges overlap or share a boundary.
        true
    }
}
