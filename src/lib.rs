//! Token-aware fuzzy filtering for symbol names.
//!
//! Ranks candidate strings against a query the way an IDE's "go to symbol"
//! box does: matches that start on token boundaries (`get|Text`,
//! `snake|_case`, `DOM.|get`) beat matches buried mid-word.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  search.rs  │────▶│  arbiter.rs  │────▶│  matching/*  │
//! │(fuzzy_search│     │ (fuzzy_match,│     │ strict, letter│
//! │  + rank)    │     │  bias order) │     │ lenient, wild│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ scoring/*   │     │ highlight.rs │     │  tokens/*    │
//! │(score, rank)│     │ (<b>x</b>)   │     │(scanner, tok)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Everything is a pure function of its arguments. No state survives a call.
//!
//! # Usage
//!
//! ```
//! use tokensift::{fuzzy_search, MatchOptions};
//!
//! let symbols = ["DOM.getText", "DOM.batchExtract", "Math.abs"];
//! let results = fuzzy_search("text", &symbols, &MatchOptions::default());
//!
//! assert_eq!(results[0].source, "DOM.getText");
//! assert_eq!(results[0].highlight, "DOM.get<b>T</b><b>e</b><b>x</b><b>t</b>");
//! assert_eq!(results.len(), 2);
//! ```

// Module declarations
mod arbiter;
pub mod contracts;
pub mod highlight;
pub mod matching;
mod options;
pub mod scoring;
mod search;
pub mod testing;
pub mod tokens;
mod types;

// Re-exports for public API
pub use arbiter::{arbitration_order, fuzzy_match, RegistryEntry};
pub use highlight::{highlight, Highlighter, TagHighlighter};
pub use matching::{
    match_letter_tokens, match_tokens_lenient, match_tokens_strict, match_wildcard, Algorithm,
};
pub use options::OptionsError;
pub use scoring::ranking::compare_results;
pub use scoring::{score, score_with_len};
#[cfg(feature = "parallel")]
pub use search::fuzzy_search_parallel;
pub use search::fuzzy_search;
pub use tokens::{fold_char, next_token_idx, next_token_idx_chars, normalize_token, tokenize, CharClass};
pub use types::{MatchOptions, MatchResult, SearchResult, DEFAULT_HIGHLIGHT_TAG};
