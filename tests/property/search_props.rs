//! Search aggregation properties.

use super::common::ranked_sources;
use super::{identifier_strategy, query_strategy};
use proptest::prelude::*;
use tokensift::{compare_results, fuzzy_match, fuzzy_search, MatchOptions};
use std::cmp::Ordering;

fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(identifier_strategy(), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: results come out in ranked order.
    #[test]
    fn prop_results_sorted(query in query_strategy(), candidates in candidates_strategy()) {
        let results = fuzzy_search(&query, &candidates, &MatchOptions::default());
        for w in results.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            prop_assert_ne!(compare_results(&w[0], &w[1]), Ordering::Greater);
        }
    }

    /// Property: every result is a real hit pointing at its own candidate.
    #[test]
    fn prop_results_are_hits(query in query_strategy(), candidates in candidates_strategy()) {
        let results = fuzzy_search(&query, &candidates, &MatchOptions::default());
        prop_assert!(results.len() <= candidates.len());
        for r in &results {
            prop_assert!(r.score > 0.0);
            prop_assert!(!r.matches.is_empty());
            prop_assert_eq!(&candidates[r.index], &r.source);
        }
    }

    /// Property: search keeps exactly the candidates that match on their own.
    #[test]
    fn prop_search_agrees_with_single_match(query in query_strategy(), candidates in candidates_strategy()) {
        let opts = MatchOptions::default();
        let results = fuzzy_search(&query, &candidates, &opts);
        let hits = candidates
            .iter()
            .filter(|c| fuzzy_match(&query, c, &opts).is_match())
            .count();
        prop_assert_eq!(results.len(), hits);
        for r in &results {
            let single = fuzzy_match(&query, &r.source, &opts);
            prop_assert_eq!(&r.matches, &single.matches);
            prop_assert_eq!(r.score, single.score);
        }
    }

    /// Property: candidate order does not change the ranked sources.
    #[test]
    fn prop_input_order_irrelevant(query in query_strategy(), candidates in candidates_strategy()) {
        let opts = MatchOptions::default();
        let forward = fuzzy_search(&query, &candidates, &opts);
        let reversed: Vec<String> = candidates.iter().rev().cloned().collect();
        let backward = fuzzy_search(&query, &reversed, &opts);
        prop_assert_eq!(ranked_sources(&forward), ranked_sources(&backward));
    }

    /// Property: the parallel variant returns the same list.
    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_matches_sequential(query in query_strategy(), candidates in candidates_strategy()) {
        let opts = MatchOptions::default();
        prop_assert_eq!(
            tokensift::fuzzy_search_parallel(&query, &candidates, &opts),
            fuzzy_search(&query, &candidates, &opts)
        );
    }
}
