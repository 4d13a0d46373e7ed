// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lenient token matching: any query token, any order, any number of times.
//!
//! At each source token start the query tokens are tried in query order and
//! the first one that fits is recorded. Query tokens are not consumed, so
//! `"get"` against `"getFoo.getBar"` records both `get`s. One hit anywhere is
//! enough to count as a match.

use super::{query_tokens, resume_after, Haystack};

/// Record every source token that starts with some query token.
///
/// ```
/// use tokensift::match_tokens_lenient;
///
/// assert_eq!(match_tokens_lenient("range map", "Map Range"), vec![0, 1, 2, 4, 5, 6, 7, 8]);
/// ```
pub fn match_tokens_lenient(query: &str, source: &str) -> Vec<usize> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let hay = Haystack::new(source);
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor < hay.len() {
        match tokens.iter().find(|token| hay.matches_at(cursor, token)) {
            Some(token) => {
                matches.extend(cursor..cursor + token.len());
                cursor = resume_after(&hay, cursor, token.len());
            }
            None => cursor = hay.next_token(cursor),
        }
    }

    matches
}
