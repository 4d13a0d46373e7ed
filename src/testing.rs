//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// The reference candidate list: seven symbols that contain "text" somewhere
/// and two that don't.
pub fn symbol_candidates() -> Vec<&'static str> {
    vec![
        "DOM.getText",
        "DOM.getTextContent",
        "DOM.getInnerText",
        "DOM.batchExtract",
        "String.extractRegexp",
        "Value.equalsText",
        "Value.containsText",
        "Math.abs",
        "Array.map",
    ]
}

/// Ranking `fuzzy_search("text", symbol_candidates(), default)` must produce.
///
/// `DOM.getInnerText` and `Value.equalsText` score exactly the same (same
/// length, same match offsets) and are ordered by the source tiebreak.
pub const TEXT_QUERY_RANKING: [&str; 7] = [
    "DOM.getText",
    "DOM.getTextContent",
    "DOM.getInnerText",
    "Value.equalsText",
    "Value.containsText",
    "DOM.batchExtract",
    "String.extractRegexp",
];

/// Identifiers in the styles the scanner has to handle.
pub fn mixed_style_identifiers() -> Vec<&'static str> {
    vec![
        "getElementById",
        "XMLHttpRequest",
        "snake_case_name",
        "kebab-case-name",
        "SCREAMING_CASE",
        "Math / Map Range",
        "path/to/file.rs",
        "  leading spaces",
        "trailing.dots...",
        "v2Parser",
        "",
    ]
}
