//! Recursive directory walk with pruning.

use super::pipeline::FileOutcome;
use crate::config::Config;
use crate::error::{LicenseCheckError, Result};
use crate::licenses::LicenseBundle;
use globset::GlobSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks roots and runs the per-file pipeline.
///
/// Holds the read-only run settings; tallies are returned, never stored.
#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a Config,
    prune_globs: GlobSet,
    fix: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config, fix: bool) -> Result<Self> {
        Ok(Self {
            config,
            prune_globs: config.prune_globset()?,
            fix,
        })
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn fix(&self) -> bool {
        self.fix
    }

    /// Walk `root` recursively and return its error tally.
    ///
    /// Hidden and pruned entries are skipped without descending into them.
    /// Entries are visited in file-name order. Symbolic links are followed,
    /// so linked files and directories are checked like any other; a link
    /// back into its own ancestry is reported and skipped. A missing or
    /// unreadable root is fatal.
    pub fn scan_root(&self, root: &Path, bundle: &LicenseBundle) -> Result<usize> {
        tracing::debug!(root = %root.display(), fix = self.fix, "scanning root");

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_pruned(root, entry));

        let mut errors = 0;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.loop_ancestor().is_some() => {
                    let path = e.path().unwrap_or(root);
                    eprintln!("WARNING: skipping symlink loop at \"{}\"", path.display());
                    tracing::warn!(path = %path.display(), "symlink loop");
                    continue;
                }
                Err(e) => {
                    return Err(LicenseCheckError::Walk {
                        path: e.path().unwrap_or(root).to_path_buf(),
                        message: e.to_string(),
                    });
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let outcome: FileOutcome = self.process_file(entry.path(), bundle)?;
            if outcome.repaired {
                tracing::debug!(path = %entry.path().display(), "repaired");
            }
            errors += outcome.errors();
        }

        tracing::debug!(root = %root.display(), errors, "finished root");
        Ok(errors)
    }

    fn is_pruned(&self, root: &Path, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || self.config.is_pruned_name(&name) {
            tracing::debug!(path = %entry.path().display(), "pruned");
            return true;
        }

        if !self.prune_globs.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(root)
            && self.prune_globs.is_match(relative)
        {
            tracing::debug!(path = %entry.path().display(), "pruned by glob");
            return true;
        }

        false
    }
}
