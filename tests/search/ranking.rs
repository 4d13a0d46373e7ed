//! Ranking tests for fuzzy_search.

use super::common::{ranked_sources, symbol_candidates, TEXT_QUERY_RANKING};
use tokensift::{fuzzy_search, Algorithm, MatchOptions};

#[test]
fn test_text_query_reference_ranking() {
    let results = fuzzy_search("text", &symbol_candidates(), &MatchOptions::default());
    assert_eq!(ranked_sources(&results), TEXT_QUERY_RANKING.to_vec());
}

#[test]
fn test_exact_score_tie_uses_source_order() {
    let results = fuzzy_search("text", &symbol_candidates(), &MatchOptions::default());
    let inner = results.iter().find(|r| r.source == "DOM.getInnerText").unwrap();
    let equals = results.iter().find(|r| r.source == "Value.equalsText").unwrap();
    assert_eq!(inner.score, equals.score);
    assert_eq!(inner.matches, equals.matches);
}

#[test]
fn test_token_aligned_matches_outrank_wildcard_matches() {
    let results = fuzzy_search("text", &symbol_candidates(), &MatchOptions::default());
    let first_wildcard = results
        .iter()
        .position(|r| r.algorithm == Some(Algorithm::Wildcard))
        .unwrap();
    assert!(results[..first_wildcard]
        .iter()
        .all(|r| r.algorithm == Some(Algorithm::TokensStrict)));
    assert!(results[first_wildcard..]
        .iter()
        .all(|r| r.algorithm == Some(Algorithm::Wildcard)));
}

#[test]
fn test_results_sorted_by_score_then_source() {
    let candidates = vec!["bTest", "aTest", "cTest", "xyz", "test"];
    let results = fuzzy_search("test", &candidates, &MatchOptions::default());
    assert_eq!(ranked_sources(&results), vec!["test", "aTest", "bTest", "cTest"]);
    for w in results.windows(2) {
        assert!(w[0].score >= w[1].score);
    }
}

#[test]
fn test_duplicates_keep_input_order() {
    let candidates = vec!["getText", "other", "getText"];
    let results = fuzzy_search("text", &candidates, &MatchOptions::default());
    let positions: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(positions, vec![0, 2]);
}

#[test]
fn test_owned_candidates() {
    let candidates: Vec<String> = symbol_candidates().into_iter().map(String::from).collect();
    let results = fuzzy_search("text", &candidates, &MatchOptions::default());
    assert_eq!(ranked_sources(&results), TEXT_QUERY_RANKING.to_vec());
}

#[test]
fn test_highlights_in_results() {
    let results = fuzzy_search("text", &symbol_candidates(), &MatchOptions::default());
    assert_eq!(results[0].highlight, "DOM.get<b>T</b><b>e</b><b>x</b><b>t</b>");
    let last = results.last().unwrap();
    assert_eq!(last.source, "String.extractRegexp");
    assert_eq!(
        last.highlight,
        "S<b>t</b>ring.<b>e</b><b>x</b><b>t</b>ractRegexp"
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_matches_sequential_on_large_input() {
    use tokensift::fuzzy_search_parallel;

    let mut candidates = Vec::new();
    for i in 0..500 {
        for base in symbol_candidates() {
            candidates.push(format!("{}{}", base, i % 7));
        }
    }
    let opts = MatchOptions::default();
    for query in ["text", "gt", "dom get", "x"] {
        assert_eq!(
            fuzzy_search_parallel(query, &candidates, &opts),
            fuzzy_search(query, &candidates, &opts),
            "query {:?}",
            query
        );
    }
}
