//! Tab expansion and trailing-whitespace removal.

use crate::checks::text;

/// Tab stops are every this many columns.
pub const TAB_WIDTH: usize = 4;

pub const EXPAND_TABS_MESSAGE: &str = "Fix: Replacing tabs with 4th-column indentation.";

pub const STRIP_TRAILING_MESSAGE: &str = "Fix: Removing trailing whitespace.";

/// Replace every tab with spaces up to the next multiple of [`TAB_WIDTH`].
///
/// Lines are split on `\n` only. The column of a tab is the byte length of
/// the line text before it, after earlier tabs on that line have already
/// been expanded. Trailing whitespace this creates is left in place.
pub fn expand_tabs(content: &[u8]) -> Vec<u8> {
    content
        .split(|&b| b == b'\n')
        .map(expand_line)
        .collect::<Vec<_>>()
        .join(&b'\n')
}

fn expand_line(line: &[u8]) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(line.len());
    for &b in line {
        if b == b'\t' {
            let pad = TAB_WIDTH - expanded.len() % TAB_WIDTH;
            expanded.resize(expanded.len() + pad, b' ');
        } else {
            expanded.push(b);
        }
    }
    expanded
}

/// Drop the run of space, tab, vertical tab and form feed at the end of
/// every `\n`-separated line.
pub fn strip_trailing_whitespace(content: &[u8]) -> Vec<u8> {
    content
        .split(|&b| b == b'\n')
        .map(text::strip_trailing_whitespace)
        .collect::<Vec<_>>()
        .join(&b'\n')
}
