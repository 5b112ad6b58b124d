//! Tab and trailing-whitespace checks.

use super::types::Violation;
use regex::bytes::Regex;
use std::sync::LazyLock;

/// Space, tab, vertical tab or form feed directly before a newline.
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\x0B\x0C ]\n").expect("trailing whitespace regex"));

/// Fails with the exact number of tab characters anywhere in `content`.
pub fn verify_tabs(content: &[u8]) -> Option<Violation> {
    let count = content.iter().filter(|&&b| b == b'\t').count();
    (count > 0).then_some(Violation::Tabs(count))
}

/// Fails when any newline-terminated line ends in whitespace.
///
/// A final line without a newline is not inspected.
pub fn verify_trailing_whitespace(content: &[u8]) -> Option<Violation> {
    TRAILING_WHITESPACE
        .is_match(content)
        .then_some(Violation::TrailingWhitespace)
}
