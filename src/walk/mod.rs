//! Directory walk and per-file check pipeline.
//!
//! A [`Scanner`] walks one root at a time, runs every check on each accepted
//! file, applies repairs in fix mode, and returns the root's error tally.

mod pipeline;
mod tree;


pub use pipeline::FileOutcome;
pub use tree::Scanner;
