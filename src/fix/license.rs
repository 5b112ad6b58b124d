//! License header repair.

use crate::checks::text::{split_preamble, strip_leading_whitespace};
use crate::licenses::{ApprovedLicenses, CommentStyle};
use std::fmt;

/// What a license repair did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseRepair {
    /// An approved header was already there behind leading whitespace.
    StripWhitespace,
    /// The default header was inserted in front of the original content.
    InsertDefault,
}

impl fmt::Display for LicenseRepair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseRepair::StripWhitespace => {
                write!(f, "Fix: removing whitespace before the approved license.")
            }
            LicenseRepair::InsertDefault => {
                write!(
                    f,
                    "Fix: Inserting a default license before the original content."
                )
            }
        }
    }
}

/// Repair the license header of `content`, returning the new content.
///
/// Hash-comment files keep their interpreter and encoding lines verbatim;
/// the header goes directly after them.
pub fn repair_license(
    content: &[u8],
    style: CommentStyle,
    licenses: &ApprovedLicenses,
) -> (Vec<u8>, LicenseRepair) {
    match style {
        CommentStyle::Hash => repair_hash(content, licenses),
        CommentStyle::Block => repair_block(content, licenses),
    }
}

fn repair_hash(content: &[u8], licenses: &ApprovedLicenses) -> (Vec<u8>, LicenseRepair) {
    let (preamble, rest) = split_preamble(content);

    if !rest.starts_with(CommentStyle::Hash.marker().as_bytes()) {
        let stripped = strip_leading_whitespace(rest);
        if licenses.starts(stripped) {
            return ([preamble, stripped].concat(), LicenseRepair::StripWhitespace);
        }
    }

    // An unterminated interpreter line would otherwise swallow the header.
    let separator: &[u8] = if preamble.is_empty() || preamble.ends_with(b"\n") {
        b""
    } else {
        b"\n"
    };

    (
        [preamble, separator, licenses.default_text(), rest].concat(),
        LicenseRepair::InsertDefault,
    )
}

fn repair_block(content: &[u8], licenses: &ApprovedLicenses) -> (Vec<u8>, LicenseRepair) {
    let stripped = strip_leading_whitespace(content);
    if licenses.starts(stripped) {
        return (stripped.to_vec(), LicenseRepair::StripWhitespace);
    }

    (
        [licenses.default_text(), content].concat(),
        LicenseRepair::InsertDefault,
    )
}
