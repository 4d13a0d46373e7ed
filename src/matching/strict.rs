// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strict token matching: whole query tokens, in order, at token starts.
//!
//! `"map range"` against `"Math / Map Range"` walks the source one token at a
//! time. A query token is consumed only when the source text at the cursor
//! starts with it; on a miss the cursor jumps to the next source token and the
//! same query token is tried again. Source tokens can be skipped, query tokens
//! cannot.
//!
//! Running off the end with query tokens left over does not retry strict
//! matching. It restarts from the next token after `start` using the
//! letter-token matcher instead.

use super::letters::letters_from;
use super::{query_tokens, resume_after, Haystack};
use crate::tokens::normalize_token;

/// Match every query token, in order, as a prefix of successive source tokens.
///
/// ```
/// use tokensift::match_tokens_strict;
///
/// assert_eq!(match_tokens_strict("text", "getText"), vec![3, 4, 5, 6]);
/// assert_eq!(match_tokens_strict("map", "Math / Map Range"), vec![7, 8, 9]);
/// ```
pub fn match_tokens_strict(query: &str, source: &str) -> Vec<usize> {
    let hay = Haystack::new(source);
    strict_from(query, &hay, 0)
}

fn strict_from(query: &str, hay: &Haystack, start: usize) -> Vec<usize> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut cursor = start;
    let mut pending = tokens.iter().peekable();

    while let Some(token) = pending.peek() {
        if cursor >= hay.len() {
            let restart = hay.next_token(start);
            if restart >= hay.len() {
                return Vec::new();
            }
            let letters: Vec<char> = normalize_token(query).chars().collect();
            return letters_from(&letters, hay, restart);
        }

        if hay.matches_at(cursor, token) {
            matches.extend(cursor..cursor + token.len());
            cursor = resume_after(hay, cursor, token.len());
            pending.next();
        } else {
            cursor = hay.next_token(cursor);
        }
    }

    matches
}
