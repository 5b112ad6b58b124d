//! Check-and-repair pipeline for a single file.

use super::tree::Scanner;
use crate::checks::{
    Violation, ViolationReport, verify_jni_string_chars, verify_license, verify_sprintf,
    verify_tabs, verify_trailing_whitespace,
};
use crate::error::Result;
use crate::fix::{
    EXPAND_TABS_MESSAGE, STRIP_TRAILING_MESSAGE, expand_tabs, repair_license,
    strip_trailing_whitespace,
};
use crate::fs::{RepairWriter, read_source, remove_backup, repair_target};
use crate::licenses::{CommentStyle, LicenseBundle};
use std::path::Path;

/// Everything found (and repaired) in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Violations in check order.
    pub violations: Vec<Violation>,
    /// Whether fix mode rewrote the file.
    pub repaired: bool,
}

impl FileOutcome {
    /// Contribution of this file to the error tally.
    pub fn errors(&self) -> usize {
        self.violations.iter().map(Violation::weight).sum()
    }
}

impl Scanner<'_> {
    /// Run every check on one file, repairing in fix mode.
    ///
    /// Files with an extension outside the configured list are skipped and
    /// contribute nothing. Each repair is written immediately and later
    /// checks see the repaired content. Content is checked as raw bytes, so
    /// files in any encoding are accepted. Repairs of a symlinked file are
    /// written to the link's target.
    pub fn process_file(&self, path: &Path, bundle: &LicenseBundle) -> Result<FileOutcome> {
        let config = self.config();
        if !config.is_checked_file(path) {
            return Ok(FileOutcome::default());
        }

        let original = read_source(path)?;
        let backup_path = config.backup_path(path);
        let target = if self.fix() {
            remove_backup(&backup_path)?;
            repair_target(path)?
        } else {
            path.to_path_buf()
        };

        let style = if config.is_hash_comment_file(path) {
            CommentStyle::Hash
        } else {
            CommentStyle::Block
        };
        let licenses = bundle.for_style(style);

        let mut writer = RepairWriter::new(target, backup_path, original.clone());
        let mut content = original;
        let mut outcome = FileOutcome::default();

        if let Some(violation) = verify_license(&content, style, licenses) {
            report(path, violation, &mut outcome);
            if self.repairs(violation) {
                let (fixed, action) = repair_license(&content, style, licenses);
                println!("{}", action);
                writer.write(&fixed)?;
                content = fixed;
            }
        }

        if let Some(violation) = verify_tabs(&content) {
            report(path, violation, &mut outcome);
            if self.repairs(violation) {
                println!("{}", EXPAND_TABS_MESSAGE);
                content = expand_tabs(&content);
                writer.write(&content)?;
            }
        }

        if let Some(violation) = verify_trailing_whitespace(&content) {
            report(path, violation, &mut outcome);
            if self.repairs(violation) {
                println!("{}", STRIP_TRAILING_MESSAGE);
                content = strip_trailing_whitespace(&content);
                writer.write(&content)?;
            }
        }

        if let Some(violation) = verify_sprintf(&content) {
            report(path, violation, &mut outcome);
        }

        if config.is_native_file(path)
            && let Some(violation) = verify_jni_string_chars(&content)
        {
            report(path, violation, &mut outcome);
        }

        outcome.repaired = writer.backup_written();
        Ok(outcome)
    }

    fn repairs(&self, violation: Violation) -> bool {
        self.fix() && violation.is_repairable()
    }
}

fn report(path: &Path, violation: Violation, outcome: &mut FileOutcome) {
    println!("{}", ViolationReport::new(path, violation));
    outcome.violations.push(violation);
}
