// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four matchers, from strictest to loosest.
//!
//! | Algorithm       | What has to line up                         | Default bias |
//! |-----------------|---------------------------------------------|--------------|
//! | `TokensStrict`  | every query token, in order, at token starts| 16           |
//! | `LetterTokens`  | query letters, resuming only at token starts| 8            |
//! | `TokensLenient` | any query token at any token start          | 4            |
//! | `Wildcard`      | plain ordered subsequence                   | 1            |
//!
//! They are a closed set: [`Algorithm::run`] is the one dispatch point. The only
//! coupling between them is explicit: when strict matching runs off the end of
//! the source it hands the restart to the letter-token matcher.
//!
//! Every matcher returns a match index set: strictly increasing char offsets
//! into the source, empty when nothing matched.

mod lenient;
mod letters;
mod strict;
mod wildcard;

pub use lenient::match_tokens_lenient;
pub use letters::match_letter_tokens;
pub use strict::match_tokens_strict;
pub use wildcard::match_wildcard;

use crate::tokens::{fold_char, next_token_idx_chars, tokenize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    TokensStrict,
    LetterTokens,
    TokensLenient,
    Wildcard,
}

impl Algorithm {
    /// Registry order. Also the tie-break order when two biases are equal.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::TokensStrict,
        Algorithm::LetterTokens,
        Algorithm::TokensLenient,
        Algorithm::Wildcard,
    ];

    /// Bias used when the caller's options leave this algorithm unset.
    pub const fn default_bias(self) -> f64 {
        match self {
            Algorithm::TokensStrict => 16.0,
            Algorithm::LetterTokens => 8.0,
            Algorithm::TokensLenient => 4.0,
            Algorithm::Wildcard => 1.0,
        }
    }

    /// Name of the matching options field that carries this algorithm's bias.
    pub const fn bias_field(self) -> &'static str {
        match self {
            Algorithm::TokensStrict => "biasTokensStrict",
            Algorithm::LetterTokens => "biasLetterTokens",
            Algorithm::TokensLenient => "biasTokensLenient",
            Algorithm::Wildcard => "biasWildcard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::TokensStrict => "tokens-strict",
            Algorithm::LetterTokens => "letter-tokens",
            Algorithm::TokensLenient => "tokens-lenient",
            Algorithm::Wildcard => "wildcard",
        }
    }

    /// Run this matcher. Empty result means no match.
    pub fn run(self, query: &str, source: &str) -> Vec<usize> {
        match self {
            Algorithm::TokensStrict => match_tokens_strict(query, source),
            Algorithm::LetterTokens => match_letter_tokens(query, source),
            Algorithm::TokensLenient => match_tokens_lenient(query, source),
            Algorithm::Wildcard => match_wildcard(query, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// SHARED SOURCE VIEW
// =============================================================================

/// A source string decoded once: raw chars for the scanner, folded chars for
/// case-insensitive comparison. Both have the same length.
pub(crate) struct Haystack {
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Haystack {
    pub(crate) fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let folded = chars.iter().map(|&c| fold_char(c)).collect();
        Haystack { chars, folded }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub(crate) fn next_token(&self, pos: usize) -> usize {
        next_token_idx_chars(&self.chars, pos)
    }

    #[inline]
    pub(crate) fn folded_at(&self, pos: usize) -> char {
        self.folded[pos]
    }

    /// Does the folded text at `pos` start with `needle`?
    pub(crate) fn matches_at(&self, pos: usize, needle: &[char]) -> bool {
        let end = pos + needle.len();
        end <= self.len() && self.folded[pos..end] == *needle
    }
}

/// Query tokens as char vectors, ready for [`Haystack::matches_at`].
pub(crate) fn query_tokens(query: &str) -> Vec<Vec<char>> {
    tokenize(query)
        .into_iter()
        .map(|t| t.chars().collect())
        .collect()
}

/// Where the cursor resumes after `len` chars matched at `pos`.
///
/// The end of the source token holding the last matched char. Usually that is
/// the token at `pos`. A query token can run past a camelCase hump ("gett"
/// against "getText"), and then the cursor skips the rest of the token it ran
/// into rather than resuming mid-token.
#[inline]
pub(crate) fn resume_after(hay: &Haystack, pos: usize, len: usize) -> usize {
    debug_assert!(len > 0, "query tokens are never empty");
    // INVARIANT: next_token(x) > x, so the result is >= pos + len
    hay.next_token(pos + len - 1)
}
