// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: one query against many candidates.
//!
//! Every candidate is matched independently, non-matches are dropped, and the
//! rest are ranked by score (descending) with the candidate string as a
//! tiebreak. Candidates share nothing, so the parallel variant fans matching
//! out over rayon and sorts once everything is collected. Both variants return
//! identical lists.

use crate::arbiter::fuzzy_match;
use crate::contracts::check_results_sorted;
use crate::scoring::ranking::rank;
use crate::types::{MatchOptions, SearchResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Match `query` against every candidate and rank the hits.
///
/// ```
/// use tokensift::{fuzzy_search, MatchOptions};
///
/// let results = fuzzy_search("gt", &["getText", "Math.abs", "gridTemplate"], &MatchOptions::default());
/// let sources: Vec<&str> = results.iter().map(|r| r.source.as_str()).collect();
/// assert_eq!(sources, vec!["getText", "gridTemplate"]);
/// assert_eq!(results[1].index, 2);
/// ```
pub fn fuzzy_search<S: AsRef<str>>(
    query: &str,
    sources: &[S],
    options: &MatchOptions,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = sources
        .iter()
        .enumerate()
        .filter_map(|(index, source)| match_candidate(query, source.as_ref(), index, options))
        .collect();
    finish(&mut results);
    results
}

/// [`fuzzy_search`] with matching spread across the rayon pool.
///
/// Worth it for large candidate lists; for a few hundred short symbols the
/// sequential version is usually faster.
#[cfg(feature = "parallel")]
pub fn fuzzy_search_parallel<S: AsRef<str> + Sync>(
    query: &str,
    sources: &[S],
    options: &MatchOptions,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = sources
        .par_iter()
        .enumerate()
        .filter_map(|(index, source)| match_candidate(query, source.as_ref(), index, options))
        .collect();
    finish(&mut results);
    results
}

fn match_candidate(
    query: &str,
    source: &str,
    index: usize,
    options: &MatchOptions,
) -> Option<SearchResult> {
    let result = fuzzy_match(query, source, options);
    if result.is_match() {
        Some(SearchResult::from_match(result, source, index))
    } else {
        None
    }
}

fn finish(results: &mut [SearchResult]) {
    rank(results);
    check_results_sorted(results);
}
