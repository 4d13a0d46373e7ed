// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! The raw score only looks at where the matched chars sit and how long the
//! source is. The algorithm that produced the match decides the multiplier
//! (its bias, see `arbiter`), so the numbers here are always pre-bias.

mod core;
pub mod ranking;

pub use core::*;
