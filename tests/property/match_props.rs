//! Matcher, scoring, and arbitration properties.

use super::common::only;
use super::{any_text_strategy, identifier_strategy, query_strategy};
use proptest::prelude::*;
use tokensift::{fuzzy_match, highlight, score, Algorithm, MatchOptions};

/// Oracle: the positional score written out directly.
fn oracle_score(source_len: usize, matches: &[usize]) -> f64 {
    let n = matches.len() as f64;
    matches.iter().map(|&m| n / (source_len as f64 + m as f64)).sum()
}

fn well_formed(source: &str, matches: &[usize]) -> bool {
    let len = source.chars().count();
    matches.iter().all(|&m| m < len) && matches.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every matcher returns a well-formed match index set.
    #[test]
    fn prop_matchers_well_formed(query in query_strategy(), source in identifier_strategy()) {
        for algorithm in Algorithm::ALL {
            let matches = algorithm.run(&query, &source);
            prop_assert!(
                well_formed(&source, &matches),
                "{} gave {:?} for {:?} in {:?}",
                algorithm, matches, query, source
            );
        }
    }

    /// Property: matching never panics and stays well-formed on arbitrary text.
    #[test]
    fn prop_fuzzy_match_total(query in any_text_strategy(), source in any_text_strategy()) {
        let result = fuzzy_match(&query, &source, &MatchOptions::default());
        prop_assert!(well_formed(&source, &result.matches));
        prop_assert_eq!(result.score == 0.0, result.matches.is_empty());
        prop_assert!(result.score >= 0.0 && result.score.is_finite());
    }

    /// Property: matched chars really are the query's chars, in order.
    #[test]
    fn prop_wildcard_matches_spell_the_query(query in "[a-z]{1,4}", source in identifier_strategy()) {
        let matches = Algorithm::Wildcard.run(&query, &source);
        if !matches.is_empty() {
            let chars: Vec<char> = source.chars().collect();
            let spelled: String = matches.iter().map(|&m| chars[m].to_ascii_lowercase()).collect();
            prop_assert_eq!(spelled, query);
        }
    }

    /// Property: letter-token matches spell the query's letters.
    #[test]
    fn prop_letter_matches_spell_the_query(query in "[a-z]{1,4}", source in identifier_strategy()) {
        let matches = Algorithm::LetterTokens.run(&query, &source);
        if !matches.is_empty() {
            let chars: Vec<char> = source.chars().collect();
            let spelled: String = matches.iter().map(|&m| chars[m].to_ascii_lowercase()).collect();
            prop_assert_eq!(spelled, query);
        }
    }

    /// Property: any token-aligned match is also a subsequence match.
    #[test]
    fn prop_letter_match_implies_wildcard_match(query in "[a-z]{1,4}", source in identifier_strategy()) {
        if !Algorithm::LetterTokens.run(&query, &source).is_empty() {
            prop_assert!(!Algorithm::Wildcard.run(&query, &source).is_empty());
        }
    }

    /// Property: score matches the closed-form oracle.
    #[test]
    fn prop_score_matches_oracle(source in identifier_strategy(), query in query_strategy()) {
        let matches = Algorithm::Wildcard.run(&query, &source);
        let len = source.chars().count();
        let got = score(&source, &matches);
        prop_assert!((got - oracle_score(len, &matches)).abs() < 1e-9);
    }

    /// Property: score is zero exactly for the empty set.
    #[test]
    fn prop_score_positive_iff_nonempty(source in identifier_strategy(), take in 0usize..6) {
        let len = source.chars().count();
        let matches: Vec<usize> = (0..len.min(take)).collect();
        let s = score(&source, &matches);
        prop_assert_eq!(s == 0.0, matches.is_empty());
        prop_assert!(s >= 0.0);
    }

    /// Property: shifting the same number of matches later never raises the score.
    #[test]
    fn prop_score_prefers_earlier(source in "[a-z]{4,20}", count in 1usize..4) {
        let len = source.chars().count();
        let early: Vec<usize> = (0..count).collect();
        let late: Vec<usize> = (len - count..len).collect();
        prop_assert!(score(&source, &early) >= score(&source, &late));
    }

    /// Property: a disabled matcher never wins.
    #[test]
    fn prop_disabled_matcher_never_selected(
        query in query_strategy(),
        source in identifier_strategy(),
        disabled in prop::sample::select(Algorithm::ALL.to_vec()),
    ) {
        let opts = MatchOptions::new().without(disabled);
        let result = fuzzy_match(&query, &source, &opts);
        prop_assert_ne!(result.algorithm, Some(disabled));
    }

    /// Property: with one matcher enabled, the result is that matcher's output.
    #[test]
    fn prop_single_matcher_passthrough(
        query in query_strategy(),
        source in identifier_strategy(),
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
    ) {
        let result = fuzzy_match(&query, &source, &only(algorithm));
        prop_assert_eq!(result.matches, algorithm.run(&query, &source));
    }

    /// Property: highlight strips back to the source.
    #[test]
    fn prop_highlight_strips_to_source(query in query_strategy(), source in identifier_strategy()) {
        let result = fuzzy_match(&query, &source, &MatchOptions::default());
        let stripped = result.highlight.replace("<b>", "").replace("</b>", "");
        prop_assert_eq!(stripped, source.clone());
        prop_assert_eq!(result.highlight.matches("<b>").count(), result.matches.len());
        prop_assert_eq!(highlight(&source, &result.matches, "b"), result.highlight);
    }
}
