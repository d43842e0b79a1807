//! Numeric token extraction from raw OCR text

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// ASCII digits only; `\d` would also match other Unicode decimal digits
static RE_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// A maximal, non-empty run of the characters `0`-`9`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NumericToken(String);

impl NumericToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NumericToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every maximal digit run in `text`, in the order the engine emitted them
pub fn extract_tokens(text: &str) -> Vec<NumericToken> {
    RE_DIGIT_RUN
        .find_iter(text)
        .map(|m| NumericToken(m.as_str().to_string()))
        .collect()
}

/// Tokens separated by a single space, the form shown and copied to users
pub fn join_tokens(tokens: &[NumericToken]) -> String {
    tokens
        .iter()
        .map(NumericToken::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
