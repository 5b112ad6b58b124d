//! Banned API usage checks.
//!
//! Both checks count non-overlapping literal occurrences and report the
//! count. They have no repair: fix mode reports them exactly as check mode
//! does.

use super::types::Violation;
use regex::bytes::Regex;
use std::sync::LazyLock;

/// Unbounded string formatting function.
pub const SPRINTF: &str = "sprintf";

/// JNI accessors that return modified UTF-8.
pub const JNI_STRING_ACCESSORS: [&str; 2] = ["GetStringChars", "GetStringUTFChars"];

static SPRINTF_CALLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&regex::escape(SPRINTF)).expect("sprintf regex"));

// The two names cannot overlap, so one alternation counts the sum.
static JNI_STRING_CALLS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = JNI_STRING_ACCESSORS
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("JNI accessor regex")
});

pub fn verify_sprintf(content: &[u8]) -> Option<Violation> {
    let count = SPRINTF_CALLS.find_iter(content).count();
    (count > 0).then_some(Violation::Sprintf(count))
}

/// Callers restrict this check to native-code files.
pub fn verify_jni_string_chars(content: &[u8]) -> Option<Violation> {
    let count = JNI_STRING_CALLS.find_iter(content).count();
    (count > 0).then_some(Violation::JniStringChars(count))
}
