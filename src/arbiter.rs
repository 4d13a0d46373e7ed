// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitration: which matcher gets to answer.
//!
//! A fresh registry of `(algorithm, bias)` pairs is built from the options on
//! every call, sorted by bias (highest first), and walked in order. The first
//! matcher that returns anything wins outright:
//!
//! ```text
//! score = positional_score(source, matches) × bias(winner)
//! ```
//!
//! Matchers further down are never run, even when one of them would have
//! produced a higher final score. That is the contract: bias is priority
//! first and a multiplier second. A bias of `0` removes the matcher from
//! the registry.

use crate::contracts::{check_match_indices, check_score_consistent};
use crate::highlight::highlight;
use crate::matching::Algorithm;
use crate::scoring::score_with_len;
use crate::types::{MatchOptions, MatchResult};

/// One registry entry with its resolved bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryEntry {
    pub algorithm: Algorithm,
    pub bias: f64,
}

/// The matchers that will be tried for these options, in the order they will
/// be tried.
///
/// Entries whose bias is not a normal positive number are left out (zero,
/// negative, NaN, infinite, subnormal). Equal biases keep registry order
/// (strict, letter-tokens, lenient, wildcard).
///
/// ```
/// use tokensift::{arbitration_order, Algorithm, MatchOptions};
///
/// let opts = MatchOptions::new().with_bias(Algorithm::Wildcard, 100.0);
/// let order: Vec<_> = arbitration_order(&opts).iter().map(|e| e.algorithm).collect();
/// assert_eq!(order[0], Algorithm::Wildcard);
/// ```
pub fn arbitration_order(options: &MatchOptions) -> Vec<RegistryEntry> {
    let mut entries: Vec<RegistryEntry> = Algorithm::ALL
        .iter()
        .map(|&algorithm| RegistryEntry {
            algorithm,
            bias: options.bias(algorithm),
        })
        .filter(|entry| entry.bias.is_normal() && entry.bias > 0.0)
        .collect();
    entries.sort_by(|a, b| b.bias.total_cmp(&a.bias));
    entries
}

/// Match `query` against `source` with the highest-priority matcher that hits.
///
/// Never fails. An empty query, an empty source, or options that disable every
/// matcher all give the no-match result: score `0`, no indices, and the source
/// as its own highlight.
///
/// ```
/// use tokensift::{fuzzy_match, MatchOptions};
///
/// let result = fuzzy_match("gt", "getText", &MatchOptions::default());
/// assert_eq!(result.matches, vec![0, 3]);
/// assert_eq!(result.highlight, "<b>g</b>et<b>T</b>ext");
/// ```
pub fn fuzzy_match(query: &str, source: &str, options: &MatchOptions) -> MatchResult {
    let source_len = source.chars().count();

    for entry in arbitration_order(options) {
        let matches = entry.algorithm.run(query, source);
        if matches.is_empty() {
            continue;
        }

        check_match_indices(source_len, &matches);
        let score = score_with_len(source_len, &matches) * entry.bias;
        check_score_consistent(score, &matches);

        return MatchResult {
            score,
            highlight: highlight(source, &matches, options.highlight_tag()),
            matches,
            algorithm: Some(entry.algorithm),
        };
    }

    MatchResult::no_match(source)
}
