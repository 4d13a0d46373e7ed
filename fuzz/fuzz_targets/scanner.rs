// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the token boundary scanner.
//!
//! Boundaries must always move forward, never overshoot the end, and never
//! depend on where the scan started from. Tokenizing must agree with the
//! scanner and keep every alphanumeric char.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tokensift::{next_token_idx, normalize_token, tokenize};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let len = text.chars().count();
    if len > 512 {
        return;
    }

    // INVARIANT 1: progress and bounds
    let mut boundaries = Vec::new();
    let mut pos = 0;
    while pos < len {
        let next = next_token_idx(&text, pos);
        assert!(next > pos, "no progress at {} in {:?}", pos, text);
        assert!(next <= len, "boundary {} past end {} in {:?}", next, len, text);
        boundaries.push(next);
        pos = next;
    }

    // INVARIANT 2: starting mid-token lands on the same boundary
    let mut start = 0;
    for &end in &boundaries {
        for p in start..end {
            assert_eq!(
                next_token_idx(&text, p),
                end,
                "scan from {} disagrees with token [{}, {}) in {:?}",
                p,
                start,
                end,
                text
            );
        }
        start = end;
    }

    // INVARIANT 3: tokens cover every alphanumeric char, in order
    let tokens = tokenize(&text);
    assert!(tokens.iter().all(|t| !t.is_empty()));
    assert_eq!(tokens.concat(), normalize_token(&text));
});
