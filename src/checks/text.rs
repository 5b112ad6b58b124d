//! Byte-exact text predicates shared by checks and repairs.
//!
//! Content is handled as raw bytes so files in any encoding are checked.
//! Whitespace handling is ASCII-only: no Unicode-aware trimming, no
//! line-ending normalisation.

/// First line of a hash-comment file naming its interpreter.
pub const INTERPRETER_PREFIX: &[u8] = b"#!";

/// First (or second) line of a Python file declaring its encoding.
pub const ENCODING_PREFIX: &[u8] = b"# -*-";

/// Leading whitespace as recognised by header checks.
pub fn is_leading_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Trailing whitespace as recognised by the line checks.
pub fn is_trailing_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0B' | b'\x0C')
}

pub fn strip_leading_whitespace(content: &[u8]) -> &[u8] {
    match content.iter().position(|&b| !is_leading_whitespace(b)) {
        Some(idx) => &content[idx..],
        None => &[],
    }
}

pub fn strip_trailing_whitespace(line: &[u8]) -> &[u8] {
    match line.iter().rposition(|&b| !is_trailing_whitespace(b)) {
        Some(idx) => &line[..=idx],
        None => &[],
    }
}

/// Split after the first newline: `(line including '\n', rest)`.
///
/// Without a newline the whole input is the line and the rest is empty.
pub fn split_first_line(content: &[u8]) -> (&[u8], &[u8]) {
    match content.iter().position(|&b| b == b'\n') {
        Some(idx) => content.split_at(idx + 1),
        None => (content, &[]),
    }
}

/// Split off an interpreter line followed by an encoding line, each only if
/// present. Returns `(preamble, rest)` with `preamble` kept verbatim.
pub fn split_preamble(content: &[u8]) -> (&[u8], &[u8]) {
    let mut consumed = 0;
    let mut rest = content;

    if rest.starts_with(INTERPRETER_PREFIX) {
        let (line, after) = split_first_line(rest);
        consumed += line.len();
        rest = after;
    }

    if rest.starts_with(ENCODING_PREFIX) {
        let (line, _) = split_first_line(rest);
        consumed += line.len();
    }

    content.split_at(consumed)
}
