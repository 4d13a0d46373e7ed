// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: turning a match index set back into text.
//!
//! A renderer only ever sees the source and the matched offsets, so any
//! presentation (HTML tags, terminal colors, a caret line under the text) can
//! be built without touching the matchers.

/// Renders a source string with its matched chars marked.
pub trait Highlighter {
    fn render(&self, source: &str, matches: &[usize]) -> String;
}

/// Wraps every matched char on its own: `<b>T</b><b>e</b>...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHighlighter {
    tag: String,
}

impl TagHighlighter {
    pub fn new(tag: impl Into<String>) -> Self {
        TagHighlighter { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for TagHighlighter {
    fn default() -> Self {
        TagHighlighter::new(crate::types::DEFAULT_HIGHLIGHT_TAG)
    }
}

impl Highlighter for TagHighlighter {
    fn render(&self, source: &str, matches: &[usize]) -> String {
        highlight(source, matches, &self.tag)
    }
}

/// Wrap each char whose offset is in `matches` in `<tag>...</tag>`.
///
/// `matches` must be sorted ascending (every match index set is). Offsets past
/// the end are ignored.
///
/// ```
/// use tokensift::highlight;
///
/// assert_eq!(highlight("getText", &[0, 3], "b"), "<b>g</b>et<b>T</b>ext");
/// ```
pub fn highlight(source: &str, matches: &[usize], tag: &str) -> String {
    if matches.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() + matches.len() * (tag.len() * 2 + 5));
    let mut pending = matches.iter().peekable();
    for (pos, c) in source.chars().enumerate() {
        if pending.peek() == Some(&&pos) {
            pending.next();
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push(c);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        } else {
            out.push(c);
        }
    }
    out
}
