// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer and normalizer.

use super::scanner::{fold_char, next_token_idx_chars};

/// Lowercase and drop everything that isn't a letter or digit.
///
/// Lowercasing goes through [`fold_char`], one char in, one char out, so a
/// normalized query compares char-for-char against folded source text.
///
/// ```
/// use tokensift::normalize_token;
///
/// assert_eq!(normalize_token("Get_Text!"), "gettext");
/// assert_eq!(normalize_token(" / "), "");
/// ```
pub fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(fold_char)
        .collect()
}

/// Split `text` into normalized tokens, in order.
///
/// Separator-only spans produce nothing, so `"--"` tokenizes to `[]`.
///
/// ```
/// use tokensift::tokenize;
///
/// assert_eq!(tokenize("helloWorld"), vec!["hello", "world"]);
/// assert_eq!(tokenize("hello / worldAndStuff"), vec!["hello", "world", "and", "stuff"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    tokenize_chars(&chars)
}

pub(crate) fn tokenize_chars(chars: &[char]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let end = next_token_idx_chars(chars, pos);
        let token: String = chars[pos..end]
            .iter()
            .filter(|c| c.is_alphanumeric())
            .map(|&c| fold_char(c))
            .collect();
        if !token.is_empty() {
            tokens.push(token);
        }
        // INVARIANT: the scanner always advances when pos < len
        debug_assert!(end > pos, "scanner stalled at {}", pos);
        pos = end;
    }
    tokens
}
