//! License header verification.

use super::text::{
    ENCODING_PREFIX, INTERPRETER_PREFIX, split_first_line, strip_leading_whitespace,
};
use super::types::Violation;
use crate::licenses::{ApprovedLicenses, CommentStyle};

/// Verify that `content` starts with an approved license header.
///
/// Failures are checked in priority order and are mutually exclusive:
/// 1. content does not start with the style's comment marker
///    ([`Violation::WhitespaceBeforeComment`] when only leading whitespace
///    hides it, [`Violation::MissingComment`] otherwise)
/// 2. the header is not an exact prefix match for any approved text
///    ([`Violation::UnapprovedLicense`])
///
/// Hash-comment files may open with an interpreter line and then an encoding
/// line; both are skipped, together with any whitespace after each, before
/// matching.
pub fn verify_license(
    content: &[u8],
    style: CommentStyle,
    licenses: &ApprovedLicenses,
) -> Option<Violation> {
    let marker = style.marker().as_bytes();

    if !content.starts_with(marker) {
        if strip_leading_whitespace(content).starts_with(marker) {
            return Some(Violation::WhitespaceBeforeComment);
        }
        return Some(Violation::MissingComment);
    }

    let header = match style {
        CommentStyle::Hash => skip_hash_preamble(content),
        CommentStyle::Block => content,
    };

    if licenses.starts(header) {
        None
    } else {
        Some(Violation::UnapprovedLicense)
    }
}

fn skip_hash_preamble(content: &[u8]) -> &[u8] {
    let mut rest = content;

    if rest.starts_with(INTERPRETER_PREFIX) {
        rest = strip_leading_whitespace(split_first_line(rest).1);
    }

    if rest.starts_with(ENCODING_PREFIX) {
        rest = strip_leading_whitespace(split_first_line(rest).1);
    }

    rest
}
