// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The positional score.
//!
//! ```text
//! score(source, M) = Σ_{m ∈ M} |M| / (len(source) + m)
//! ```
//!
//! Each matched char contributes `|M| / (len + m)`:
//! - more matched chars means more terms and a bigger numerator
//! - a char matched early has a small `m`, so a big term
//! - a short source has a small `len`, so every term is bigger
//!
//! Every term is positive, so the score is `0` exactly when `M` is empty.
//! That makes `0` the universal "no match" value and nothing else needs one.

/// Positional score of a match index set against `source`. Pre-bias.
///
/// `matches` holds char offsets; `source` length is counted in chars.
///
/// ```
/// use tokensift::score;
///
/// assert_eq!(score("getText", &[]), 0.0);
/// assert!(score("getText", &[3, 4, 5, 6]) > 0.0);
/// assert!(score("getText", &[0]) > score("getText", &[3]));
/// ```
pub fn score(source: &str, matches: &[usize]) -> f64 {
    score_with_len(source.chars().count(), matches)
}

/// [`score`] for callers that already know the char length.
pub fn score_with_len(source_len: usize, matches: &[usize]) -> f64 {
    let count = matches.len() as f64;
    matches
        .iter()
        .map(|&m| count / (source_len + m) as f64)
        .sum()
}
