// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Letter-token matching: `"gt"` finds `g`et`T`ext.
//!
//! The query is flattened to its letters and digits. Each letter must match
//! the char under the cursor. A hit moves the cursor one char forward, staying
//! inside the token. A miss throws away the rest of the token and jumps to the
//! next token start. So a letter only lands mid-token when the letter before it
//! matched in that same token.
//!
//! If the source runs out first, the whole attempt is retried from the next
//! token after the previous starting point.

use super::Haystack;
use crate::tokens::normalize_token;

/// Match query letters against token starts and their continuations.
///
/// ```
/// use tokensift::match_letter_tokens;
///
/// assert_eq!(match_letter_tokens("gt", "getText"), vec![0, 3]);
/// assert!(match_letter_tokens("et", "getText").is_empty());
/// ```
pub fn match_letter_tokens(query: &str, source: &str) -> Vec<usize> {
    let letters: Vec<char> = normalize_token(query).chars().collect();
    let hay = Haystack::new(source);
    letters_from(&letters, &hay, 0)
}

/// Letter-token matching from `start`, retrying from later token starts.
pub(crate) fn letters_from(letters: &[char], hay: &Haystack, start: usize) -> Vec<usize> {
    if letters.is_empty() {
        return Vec::new();
    }

    let mut start = start;
    while start < hay.len() {
        if let Some(matches) = attempt(letters, hay, start) {
            return matches;
        }
        // INVARIANT: next_token(start) > start while start < len, so this terminates
        start = hay.next_token(start);
    }
    Vec::new()
}

fn attempt(letters: &[char], hay: &Haystack, start: usize) -> Option<Vec<usize>> {
    let mut matches = Vec::with_capacity(letters.len());
    let mut cursor = start;
    let mut pending = letters.iter().peekable();

    while let Some(&&letter) = pending.peek() {
        if cursor >= hay.len() {
            return None;
        }
        if hay.folded_at(cursor) == letter {
            matches.push(cursor);
            cursor += 1;
            pending.next();
        } else {
            cursor = hay.next_token(cursor);
        }
    }

    Some(matches)
}
