// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matcher and arbitration invariants.
//!
//! Whatever the bytes, every matcher must return strictly increasing in-bounds
//! offsets, the arbitrated score must be zero exactly when nothing matched, and
//! the same call twice must give the same answer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tokensift::{fuzzy_match, Algorithm, MatchOptions};

/// Fuzz input for a single match
#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    source: String,
    /// Raw biases, including zero, negative and NaN
    biases: [f64; 4],
    use_defaults: bool,
}

fuzz_target!(|input: MatchInput| {
    if input.query.len() > 64 || input.source.len() > 256 {
        return;
    }
    let len = input.source.chars().count();

    // INVARIANT 1: every matcher returns a well-formed index set
    for algorithm in Algorithm::ALL {
        let matches = algorithm.run(&input.query, &input.source);
        assert!(matches.iter().all(|&m| m < len), "{} out of bounds: {:?}", algorithm, matches);
        assert!(
            matches.windows(2).all(|w| w[0] < w[1]),
            "{} not strictly increasing: {:?}",
            algorithm,
            matches
        );
    }

    let options = if input.use_defaults {
        MatchOptions::default()
    } else {
        Algorithm::ALL
            .iter()
            .zip(input.biases)
            .fold(MatchOptions::new(), |opts, (&a, bias)| opts.with_bias(a, bias))
    };

    let first = fuzzy_match(&input.query, &input.source, &options);
    let second = fuzzy_match(&input.query, &input.source, &options);

    // INVARIANT 2: score is non-negative and zero iff no match
    assert!(first.score >= 0.0, "negative score {}", first.score);
    assert_eq!(first.score == 0.0, first.matches.is_empty());

    // INVARIANT 3: the winner comes from an enabled matcher
    if let Some(algorithm) = first.algorithm {
        let bias = options.bias(algorithm);
        assert!(bias.is_normal() && bias > 0.0, "disabled matcher {} won", algorithm);
    }

    // INVARIANT 4: deterministic
    assert_eq!(first.matches, second.matches);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(first.highlight, second.highlight);
});
