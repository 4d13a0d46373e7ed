// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wildcard matching: the last resort.
//!
//! Plain ordered subsequence, first occurrence wins. Whitespace in the query
//! is ignored; punctuation is not.

use crate::tokens::fold_char;

/// Find each query char, in order, somewhere after the previous one.
///
/// ```
/// use tokensift::match_wildcard;
///
/// assert_eq!(match_wildcard("text", "DOM.batchExtract"), vec![6, 9, 10, 11]);
/// assert!(match_wildcard("tx", "xt").is_empty());
/// ```
pub fn match_wildcard(query: &str, source: &str) -> Vec<usize> {
    let needle: Vec<char> = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_char)
        .collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut haystack = source.chars().map(fold_char).enumerate();
    let mut matches = Vec::with_capacity(needle.len());
    for &wanted in &needle {
        match haystack.by_ref().find(|&(_, c)| c == wanted) {
            Some((pos, _)) => matches.push(pos),
            None => return Vec::new(),
        }
    }
    matches
}
