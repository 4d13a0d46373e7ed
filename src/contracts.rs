// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the match data model.
//!
//! Debug-mode assertions for the invariants every result must satisfy:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure** in tests and fuzzing, at the call that broke things
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                     |
//! |-----------------------------|----------------------------------------------|
//! | `check_match_indices`       | strictly increasing, all `< len(source)`     |
//! | `check_score_consistent`    | score is 0 iff indices empty, never negative |
//! | `check_results_sorted`      | score desc, then source asc                  |

use crate::scoring::ranking::compare_results;
use crate::types::SearchResult;
use std::cmp::Ordering;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

// INVARIANT: default biases are distinct and descend in registry order, so the
// default arbitration order never depends on tie-breaking.
const _: () = {
    use crate::matching::Algorithm;
    let strict = Algorithm::TokensStrict.default_bias();
    let letters = Algorithm::LetterTokens.default_bias();
    let lenient = Algorithm::TokensLenient.default_bias();
    let wildcard = Algorithm::Wildcard.default_bias();
    assert!(strict > letters);
    assert!(letters > lenient);
    assert!(lenient > wildcard);
    assert!(wildcard > 0.0);
};

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that `matches` is a well-formed match index set for a source of
/// `source_len` chars.
///
/// # Panics (debug builds only)
/// Panics if an index is out of bounds or the indices are not strictly increasing.
#[inline]
pub fn check_match_indices(source_len: usize, matches: &[usize]) {
    // INVARIANT: every index lies in [0, len(source))
    debug_assert!(
        matches.iter().all(|&m| m < source_len),
        "match index out of bounds: {:?} for source of {} chars",
        matches,
        source_len
    );
    // INVARIANT: indices are strictly increasing
    debug_assert!(
        matches.windows(2).all(|w| w[0] < w[1]),
        "match indices not strictly increasing: {:?}",
        matches
    );
}

/// Check that a score agrees with its match index set.
///
/// # Panics (debug builds only)
/// Panics if the score is negative or NaN, or if it is zero for a non-empty set
/// (or non-zero for an empty one).
#[inline]
pub fn check_score_consistent(score: f64, matches: &[usize]) {
    // INVARIANT: score is a non-negative real
    debug_assert!(score >= 0.0, "score must be >= 0, got {}", score);
    // INVARIANT: score == 0 iff no match
    debug_assert!(
        (score == 0.0) == matches.is_empty(),
        "score {} inconsistent with {} matches",
        score,
        matches.len()
    );
}

// ============================================================================
// RESULT LIST CONTRACTS
// ============================================================================

/// Check that search results are in final ranked order.
///
/// # Panics (debug builds only)
/// Panics if two neighbours are out of order.
#[inline]
pub fn check_results_sorted(results: &[SearchResult]) {
    // INVARIANT: ranked order is score descending, then source ascending
    debug_assert!(
        results
            .windows(2)
            .all(|w| compare_results(&w[0], &w[1]) != Ordering::Greater),
        "search results not in ranked order"
    );
}
