//! Options: defaults, wire format, validation.

use tokensift::{fuzzy_match, Algorithm, MatchOptions, OptionsError};

#[test]
fn test_unset_fields_fall_back_per_algorithm() {
    let opts = MatchOptions::new().with_bias(Algorithm::LetterTokens, 30.0);
    assert_eq!(opts.bias(Algorithm::LetterTokens), 30.0);
    for other in [Algorithm::TokensStrict, Algorithm::TokensLenient, Algorithm::Wildcard] {
        assert_eq!(opts.bias(other), other.default_bias());
    }
}

#[test]
fn test_bias_field_names_match_wire_format() {
    for algorithm in Algorithm::ALL {
        let opts = MatchOptions::new().with_bias(algorithm, 3.0);
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json[algorithm.bias_field()], 3.0, "{}", algorithm.bias_field());
    }
}

#[test]
fn test_options_round_trip_through_json() {
    let opts = MatchOptions::new()
        .with_highlight_tag("mark")
        .without(Algorithm::Wildcard);
    let json = serde_json::to_string(&opts).unwrap();
    let back: MatchOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[cfg(feature = "serde_json")]
#[test]
fn test_from_json_drives_matching() {
    let opts = MatchOptions::from_json(r#"{"highlightTag": "em", "biasWildcard": 0}"#).unwrap();
    let result = fuzzy_match("text", "DOM.batchExtract", &opts);
    assert_eq!(result.score, 0.0);

    let result = fuzzy_match("gt", "getText", &opts);
    assert_eq!(result.highlight, "<em>g</em>et<em>T</em>ext");
}

#[cfg(feature = "serde_json")]
#[test]
fn test_from_json_rejects_negative_bias() {
    let err = MatchOptions::from_json(r#"{"biasTokensLenient": -4}"#).unwrap_err();
    assert_eq!(
        err,
        OptionsError::InvalidBias {
            field: "biasTokensLenient",
            value: -4.0
        }
    );
}

#[test]
fn test_unvalidated_options_never_make_matching_fail() {
    // Negative and NaN biases just switch their matcher off.
    let opts = MatchOptions::new()
        .with_bias(Algorithm::TokensStrict, -1.0)
        .with_bias(Algorithm::LetterTokens, f64::NAN)
        .with_bias(Algorithm::TokensLenient, f64::NEG_INFINITY)
        .with_highlight_tag("");
    assert!(opts.validate().is_err());

    let result = fuzzy_match("text", "getText", &opts);
    assert_eq!(result.algorithm, Some(Algorithm::Wildcard));
    assert!(result.score > 0.0);
}
