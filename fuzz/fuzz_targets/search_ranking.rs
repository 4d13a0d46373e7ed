// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search aggregation.
//!
//! Results must be ranked (score descending, then source ascending), carry the
//! position of their own candidate, and contain only real hits.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use tokensift::{compare_results, fuzzy_search, MatchOptions};

/// Fuzz input for a search
#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: SearchInput| {
    if input.query.len() > 32 || input.candidates.len() > 64 {
        return;
    }
    if input.candidates.iter().any(|c| c.len() > 128) {
        return;
    }

    let results = fuzzy_search(&input.query, &input.candidates, &MatchOptions::default());

    // INVARIANT 1: only hits, pointing back at their candidate
    assert!(results.len() <= input.candidates.len());
    for r in &results {
        assert!(r.score > 0.0);
        assert!(!r.matches.is_empty());
        assert_eq!(input.candidates[r.index], r.source);
    }

    // INVARIANT 2: ranked order
    for w in results.windows(2) {
        assert_ne!(
            compare_results(&w[0], &w[1]),
            Ordering::Greater,
            "{:?} ranked above {:?}",
            w[0].source,
            w[1].source
        );
    }

    // INVARIANT 3: the parallel variant agrees
    #[cfg(feature = "parallel")]
    {
        let parallel = tokensift::fuzzy_search_parallel(
            &input.query,
            &input.candidates,
            &MatchOptions::default(),
        );
        assert_eq!(parallel, results);
    }
});
