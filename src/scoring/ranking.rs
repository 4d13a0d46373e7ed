// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending, higher wins
/// 2. **Source** - ascending by code point, for determinism
///
/// Identical sources with identical scores compare equal; a stable sort keeps
/// them in input order.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.source.cmp(&b.source))
}

/// Sort results into ranked order.
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}
