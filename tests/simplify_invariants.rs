//! Invariant tests for the simplification strategies.
//!
//! These verify properties that must hold for every valid input, not just
//! the pinned scenarios: simplification never changes what an alignment
//! means, never grows it, always lands on a true fixed point, and the
//! exhaustive strategy never loses to the greedy one.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use weft::{
    merge, pairs_from_flat, FastSimplifier, OptimalSimplifier, Simplifier, SpanPair, TextView,
};

// =============================================================================
// Generators
// =============================================================================

/// Two small texts (letters and spaces) plus a flat alignment of valid pairs
/// over them. Duplicates and arbitrary order are intentional: producers hand
/// the simplifier exactly that.
fn arb_inputs(max_pairs: usize) -> impl Strategy<Value = (String, String, Vec<usize>)> {
    ("[a-c ]{1,8}", "[a-c ]{1,8}").prop_flat_map(move |(from_text, to_text)| {
        let from_len = from_text.chars().count();
        let to_len = to_text.chars().count();

        let pair = (0..from_len, 0..to_len).prop_flat_map(move |(fs, ts)| {
            (fs + 1..=from_len, ts + 1..=to_len)
                .prop_map(move |(fe, te)| vec![fs, fe, ts, te])
        });

        (
            Just(from_text),
            Just(to_text),
            proptest::collection::vec(pair, 0..max_pairs).prop_map(|quads| quads.concat()),
        )
    })
}

fn dedup_count(alignment: &[usize]) -> usize {
    alignment
        .chunks_exact(4)
        .map(|q| [q[0], q[1], q[2], q[3]])
        .collect::<BTreeSet<_>>()
        .len()
}

// =============================================================================
// Projections
// =============================================================================

/// For every non-whitespace position of one text, the set of non-whitespace
/// positions of the other text the alignment connects it to.
///
/// Whitespace positions are excluded on both ends: bridging a blank gap is
/// exactly the change the merge rule is allowed to make, so the meaning of an
/// alignment is its projection over non-blank characters.
fn projections(
    pairs: &[SpanPair],
    from_text: &str,
    to_text: &str,
) -> (
    BTreeMap<usize, BTreeSet<usize>>,
    BTreeMap<usize, BTreeSet<usize>>,
) {
    let from_solid: Vec<bool> = from_text.chars().map(|c| !c.is_whitespace()).collect();
    let to_solid: Vec<bool> = to_text.chars().map(|c| !c.is_whitespace()).collect();

    let mut from_to: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    let mut to_from: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();

    for pair in pairs {
        for p in pair.from_range() {
            if !from_solid[p] {
                continue;
            }
            for q in pair.to_range() {
                if to_solid[q] {
                    from_to.entry(p).or_default().insert(q);
                }
            }
        }
        for q in pair.to_range() {
            if !to_solid[q] {
                continue;
            }
            for p in pair.from_range() {
                if from_solid[p] {
                    to_from.entry(q).or_default().insert(p);
                }
            }
        }
    }

    (from_to, to_from)
}

fn strategies() -> Vec<Box<dyn Simplifier>> {
    vec![
        Box::new(FastSimplifier::new()),
        Box::new(OptimalSimplifier::new()),
    ]
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    /// Simplifying twice changes nothing the second time.
    #[test]
    fn idempotent((from_text, to_text, alignment) in arb_inputs(7)) {
        for s in strategies() {
            let once = s.simplify(&alignment, &from_text, &to_text).unwrap();
            let twice = s.simplify(&once, &from_text, &to_text).unwrap();
            prop_assert_eq!(&twice, &once, "{} not idempotent", s.name());
        }
    }

    /// The output never has more pairs than the deduplicated input.
    #[test]
    fn never_expands((from_text, to_text, alignment) in arb_inputs(7)) {
        for s in strategies() {
            let out = s.simplify(&alignment, &from_text, &to_text).unwrap();
            prop_assert!(
                out.len() / 4 <= dedup_count(&alignment),
                "{} grew the alignment",
                s.name()
            );
        }
    }

    /// What the alignment means - which solid characters of one text each
    /// solid character of the other selects - survives simplification.
    #[test]
    fn projections_preserved((from_text, to_text, alignment) in arb_inputs(7)) {
        let input_pairs = pairs_from_flat(&alignment).unwrap();
        let expected = projections(&input_pairs, &from_text, &to_text);

        for s in strategies() {
            let out = s.simplify(&alignment, &from_text, &to_text).unwrap();
            let out_pairs = pairs_from_flat(&out).unwrap();
            let got = projections(&out_pairs, &from_text, &to_text);
            prop_assert_eq!(&got, &expected, "{} changed the projection", s.name());
        }
    }

    /// No two output pairs are still eligible to merge.
    #[test]
    fn output_is_a_fixed_point((from_text, to_text, alignment) in arb_inputs(7)) {
        let from = TextView::new(&from_text);
        let to = TextView::new(&to_text);

        for s in strategies() {
            let out = s.simplify(&alignment, &from_text, &to_text).unwrap();
            let pairs = pairs_from_flat(&out).unwrap();

            for i in 0..pairs.len() {
                for j in (i + 1)..pairs.len() {
                    prop_assert!(
                        merge(pairs[i], pairs[j], &from, &to).is_none(),
                        "{} left {} and {} mergeable",
                        s.name(),
                        pairs[i],
                        pairs[j]
                    );
                }
            }
        }
    }

    /// Output is sorted with no duplicates.
    #[test]
    fn output_is_canonical((from_text, to_text, alignment) in arb_inputs(7)) {
        for s in strategies() {
            let out = s.simplify(&alignment, &from_text, &to_text).unwrap();
            let pairs = pairs_from_flat(&out).unwrap();
            prop_assert!(
                pairs.windows(2).all(|w| w[0] < w[1]),
                "{} output not strictly sorted",
                s.name()
            );
        }
    }

    /// The exhaustive strategy never returns more pairs than the greedy one.
    #[test]
    fn optimal_never_loses_to_fast((from_text, to_text, alignment) in arb_inputs(6)) {
        let fast = FastSimplifier::new()
            .simplify(&alignment, &from_text, &to_text)
            .unwrap();
        let optimal = OptimalSimplifier::new()
            .simplify(&alignment, &from_text, &to_text)
            .unwrap();

        prop_assert!(optimal.len() <= fast.len());
    }
}
