//! Filesystem utilities for licensescheck.
//!
//! Reading source files, atomically replacing repaired ones, and keeping a
//! single backup per repaired file.

pub mod atomic;
mod backup;

pub use backup::{RepairWriter, read_source, remove_backup, repair_target};
