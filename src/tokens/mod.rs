// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokens: where identifiers come apart.
//!
//! A symbol like `DOM.getInnerText` is really four words glued together with
//! punctuation and case changes. Everything downstream (the matchers, the
//! tokenizer, the scorer's notion of a "good" match) leans on one primitive:
//! given a position, where does the current token end?

mod scanner;
mod tokenize;

pub use scanner::*;
pub use tokenize::*;
