//! Per-file rule checks.
//!
//! Five independent predicates over file content, run in this order by the
//! walker:
//! - License header (hash-comment or block-comment rules)
//! - Tab characters
//! - Trailing whitespace
//! - `sprintf` usage
//! - JNI string accessors (native files only)
//!
//! Checks never touch the filesystem. The first three have a matching
//! repair in [`crate::fix`]; the banned-API checks are detection-only.

mod banned;
mod formatting;
mod license;
pub mod text;
mod types;


// Re-export public API
pub use banned::{verify_jni_string_chars, verify_sprintf};
pub use formatting::{verify_tabs, verify_trailing_whitespace};
pub use license::verify_license;
pub use types::{Violation, ViolationReport};
