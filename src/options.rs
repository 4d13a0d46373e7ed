// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validating options that come from outside the process.
//!
//! Matching never fails, whatever the options say: a bias that isn't a normal
//! positive number just disables its algorithm. That is forgiving, and it also
//! hides typos. Options read from a config file or a request body go through
//! [`MatchOptions::validate`] (or [`MatchOptions::from_json`], which calls it)
//! so a `-8` or an empty tag is rejected instead of silently switching
//! something off.

use crate::matching::Algorithm;
use crate::types::MatchOptions;
use std::fmt;

/// Why a set of options was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// A bias is negative, NaN, or infinite.
    InvalidBias { field: &'static str, value: f64 },
    /// `highlightTag` is present but empty or contains markup characters.
    InvalidHighlightTag { tag: String },
    /// The JSON didn't parse or didn't fit the options shape.
    Json(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidBias { field, value } => {
                write!(f, "{} must be a finite number >= 0, got {}", field, value)
            }
            OptionsError::InvalidHighlightTag { tag } => {
                write!(f, "highlightTag {:?} is not a usable tag name", tag)
            }
            OptionsError::Json(msg) => write!(f, "invalid options JSON: {}", msg),
        }
    }
}

impl std::error::Error for OptionsError {}

impl MatchOptions {
    /// Check every explicitly set field.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for algorithm in Algorithm::ALL {
            let value = self.bias(algorithm);
            if !value.is_finite() || value < 0.0 {
                return Err(OptionsError::InvalidBias {
                    field: algorithm.bias_field(),
                    value,
                });
            }
        }

        if let Some(tag) = &self.highlight_tag {
            let usable = !tag.is_empty()
                && !tag
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"'));
            if !usable {
                return Err(OptionsError::InvalidHighlightTag { tag: tag.clone() });
            }
        }

        Ok(())
    }

    /// Parse camelCase JSON options and validate them.
    ///
    /// ```
    /// use tokensift::{Algorithm, MatchOptions};
    ///
    /// let opts = MatchOptions::from_json(r#"{"biasWildcard": 0}"#).unwrap();
    /// assert_eq!(opts.bias(Algorithm::Wildcard), 0.0);
    ///
    /// assert!(MatchOptions::from_json(r#"{"biasWildcard": -1}"#).is_err());
    /// ```
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: MatchOptions =
            serde_json::from_str(json).map_err(|e| OptionsError::Json(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}
