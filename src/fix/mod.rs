//! Repairs for the fixable rule violations.
//!
//! Every repair is a pure text transformation; writing the result (and the
//! backup) is the caller's job, see [`crate::fs::RepairWriter`].

mod license;
mod whitespace;


pub use license::{LicenseRepair, repair_license};
pub use whitespace::{
    EXPAND_TABS_MESSAGE, STRIP_TRAILING_MESSAGE, expand_tabs, strip_trailing_whitespace,
};
