//! Configuration model for licensescheck.
//!
//! This module defines the Config struct that describes which files are
//! scanned, which entries are pruned, and where the approved license bundles
//! live. Every field has a built-in default; an optional YAML file overrides
//! individual fields (unknown fields are ignored).

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
