// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The token scanner.
//!
//! Three ordered rules, evaluated at the start position:
//!
//! ```text
//! (a) Alnum* LowerOrDigit (?=Upper)    camelCase hump: "get" in "getText"
//! (b) Alnum+ Other*                    word plus trailing separators
//! (c) Other+ (?=Alnum | end)           separator run: zero-width token
//! ```
//!
//! Rule (a) looks for the first lowercase-to-uppercase step anywhere in the
//! alphanumeric run, not just right after an optional leading capital. For
//! `getText` that makes no difference. For `XMLHttpRequest` it means scanning
//! from 0 stops at `R` just as scanning from 3 does, which keeps the scanner
//! monotonic: a later start never yields an earlier end. It also means a hump
//! after a leading acronym splits: `ABcD` from 0 ends at 3, not 4.
//!
//! A char is `Upper` only when folding changes it. Uppercase letters with no
//! lowercase form (`𝓐`) count as `LowerOrDigit`, so folded text never has a
//! hump the scanner would split on and tokenizing is idempotent.
//!
//! The returned offset is where the next token starts. Matchers use it to
//! jump a whole token on mismatch instead of crawling one char at a time,
//! which keeps them at O(tokens × query) rather than O(len × query).
//!
//! All offsets are char (code point) offsets, never byte offsets.

/// Character class used by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letter with a distinct lowercase form.
    Upper,
    /// Lowercase letter, digit, or a letter from a caseless script.
    LowerOrDigit,
    /// Separators, whitespace, punctuation.
    Other,
}

impl CharClass {
    #[inline]
    pub fn of(c: char) -> Self {
        if !c.is_alphanumeric() {
            CharClass::Other
        } else if fold_char(c) != c {
            CharClass::Upper
        } else {
            CharClass::LowerOrDigit
        }
    }

    #[inline]
    pub fn is_alphanumeric(self) -> bool {
        self != CharClass::Other
    }
}

/// Case-fold a single char without changing the char count.
///
/// `to_lowercase` can expand (`'İ'` becomes two chars); we keep the first so
/// that match offsets computed on folded text line up with the source.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Where does the token at `start` end?
///
/// Returns an offset in `[start, len]`. `start` beyond the end clamps to the
/// char length of `source`.
///
/// ```
/// use tokensift::next_token_idx;
///
/// assert_eq!(next_token_idx("getText", 0), 3);
/// assert_eq!(next_token_idx("Math / Map", 0), 7);
/// assert_eq!(next_token_idx("getText", 7), 7);
/// ```
pub fn next_token_idx(source: &str, start: usize) -> usize {
    let chars: Vec<char> = source.chars().collect();
    next_token_idx_chars(&chars, start)
}

/// Same as [`next_token_idx`], over a pre-decoded source.
///
/// The matchers decode each source once and call this in their inner loops.
pub fn next_token_idx_chars(chars: &[char], start: usize) -> usize {
    let len = chars.len();
    if start >= len {
        return len;
    }

    let class_at = |i: usize| CharClass::of(chars[i]);

    if class_at(start).is_alphanumeric() {
        let mut p = start + 1;
        while p < len {
            let class = class_at(p);
            if !class.is_alphanumeric() {
                break;
            }
            // (a) camelCase hump
            if class == CharClass::Upper && class_at(p - 1) == CharClass::LowerOrDigit {
                return p;
            }
            p += 1;
        }
        // (b) trailing separators belong to the word
        while p < len && !class_at(p).is_alphanumeric() {
            p += 1;
        }
        return p;
    }

    // (c) separator run up to the next real token
    let mut p = start;
    while p < len && !class_at(p).is_alphanumeric() {
        p += 1;
    }
    p
}
