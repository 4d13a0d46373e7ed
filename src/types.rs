// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a match.
//!
//! Nothing here is mutated after construction and nothing outlives a call.
//! Options go in, a [`MatchResult`] (or a list of [`SearchResult`]s) comes out.
//!
//! # Invariants
//!
//! - **Match index set** (`matches`): strictly increasing char offsets, every
//!   one `< len(source)`. Empty if and only if the match failed.
//!
//! - **Score**: `0.0` if and only if `matches` is empty, positive otherwise.
//!
//! `contracts` checks both in debug builds.

use crate::matching::Algorithm;
use serde::{Deserialize, Serialize};

/// Default tag wrapped around each matched char in the highlight.
pub const DEFAULT_HIGHLIGHT_TAG: &str = "b";

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-call matching options. Every field is optional and falls back to its
/// default when read.
///
/// Field names on the wire are camelCase:
///
/// ```json
/// { "highlightTag": "em", "biasWildcard": 0 }
/// ```
///
/// A bias of `0` disables its algorithm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Tag name for the highlight, `"b"` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_tag: Option<String>,

    /// Bias for strict token matching, 16 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_tokens_strict: Option<f64>,

    /// Bias for letter-token matching, 8 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_letter_tokens: Option<f64>,

    /// Bias for lenient token matching, 4 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_tokens_lenient: Option<f64>,

    /// Bias for wildcard matching, 1 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_wildcard: Option<f64>,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bias for one algorithm.
    pub fn with_bias(mut self, algorithm: Algorithm, bias: f64) -> Self {
        *self.bias_slot(algorithm) = Some(bias);
        self
    }

    /// Shorthand for `with_bias(algorithm, 0.0)`.
    pub fn without(self, algorithm: Algorithm) -> Self {
        self.with_bias(algorithm, 0.0)
    }

    pub fn with_highlight_tag(mut self, tag: impl Into<String>) -> Self {
        self.highlight_tag = Some(tag.into());
        self
    }

    /// Effective bias: the caller's value or the algorithm default.
    pub fn bias(&self, algorithm: Algorithm) -> f64 {
        let explicit = match algorithm {
            Algorithm::TokensStrict => self.bias_tokens_strict,
            Algorithm::LetterTokens => self.bias_letter_tokens,
            Algorithm::TokensLenient => self.bias_tokens_lenient,
            Algorithm::Wildcard => self.bias_wildcard,
        };
        explicit.unwrap_or_else(|| algorithm.default_bias())
    }

    /// Effective highlight tag.
    pub fn highlight_tag(&self) -> &str {
        self.highlight_tag.as_deref().unwrap_or(DEFAULT_HIGHLIGHT_TAG)
    }

    fn bias_slot(&mut self, algorithm: Algorithm) -> &mut Option<f64> {
        match algorithm {
            Algorithm::TokensStrict => &mut self.bias_tokens_strict,
            Algorithm::LetterTokens => &mut self.bias_letter_tokens,
            Algorithm::TokensLenient => &mut self.bias_tokens_lenient,
            Algorithm::Wildcard => &mut self.bias_wildcard,
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Outcome of matching one query against one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Biased score; `0.0` means no match.
    pub score: f64,
    /// Matched char offsets, strictly increasing.
    pub matches: Vec<usize>,
    /// Source with each matched char wrapped in the highlight tag.
    pub highlight: String,
    /// Which matcher produced `matches`. `None` when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
}

impl MatchResult {
    /// The "no match" result: score 0, no indices, source unchanged.
    pub fn no_match(source: &str) -> Self {
        MatchResult {
            score: 0.0,
            matches: Vec::new(),
            highlight: source.to_string(),
            algorithm: None,
        }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// One ranked candidate from a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub matches: Vec<usize>,
    /// The candidate string as given.
    pub source: String,
    /// Position of the candidate in the input list.
    pub index: usize,
    pub highlight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
}

impl SearchResult {
    pub(crate) fn from_match(result: MatchResult, source: &str, index: usize) -> Self {
        SearchResult {
            score: result.score,
            matches: result.matches,
            source: source.to_string(),
            index,
            highlight: result.highlight,
            algorithm: result.algorithm,
        }
    }
}
