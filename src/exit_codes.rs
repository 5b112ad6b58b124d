//! Exit code constants for licensescheck.
//!
//! A completed run exits with its violation tally:
//! - 0: Success, no violations anywhere
//! - 1..=254: Number of violations found (clamped at 254)
//! - 255: Fatal error (unreadable file, missing license bundle, bad config)

/// Successful execution with no violations.
pub const SUCCESS: i32 = 0;

/// Largest violation tally that can be reported through the exit status.
pub const MAX_TALLY: i32 = 254;

/// Fatal error: the run was aborted before the walk completed.
pub const FATAL: i32 = 255;

/// Map a violation tally to a process exit code.
///
/// Tallies never wrap to 0 and never collide with [`FATAL`].
pub fn from_tally(tally: usize) -> i32 {
    i32::try_from(tally).map_or(MAX_TALLY, |t| t.min(MAX_TALLY))
}
