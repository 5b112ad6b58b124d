//! Config loading, validation, and lookup operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_PATH;
use crate::error::{LicenseCheckError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content =
            std::fs::read_to_string(path).map_err(|e| LicenseCheckError::read(path, e))?;

        Self::from_yaml(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `<base>/tools/licensescheck.yaml`
    /// is used when present and the built-in defaults otherwise.
    pub fn resolve(base: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit: PathBuf = base.join(DEFAULT_CONFIG_PATH);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            return Self::load(&implicit);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LicenseCheckError::Config(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - extension entries must be non-empty and have no leading dots
    /// - `backup_extension` must be non-empty
    /// - every license list must name at least one file
    /// - `prune_globs` must compile
    pub fn validate(&self) -> Result<()> {
        for (field, list) in [
            ("extensions", &self.extensions),
            ("hash_comment_extensions", &self.hash_comment_extensions),
            ("native_extensions", &self.native_extensions),
        ] {
            for ext in list {
                if ext.is_empty() {
                    return Err(LicenseCheckError::Config(format!(
                        "config validation failed: {} entries must be non-empty",
                        field
                    )));
                }
                if ext.starts_with('.') {
                    return Err(LicenseCheckError::Config(format!(
                        "config validation failed: {} entries must not have leading dots (found '{}'). Use '{}' instead.",
                        field,
                        ext,
                        ext.trim_start_matches('.')
                    )));
                }
            }
        }

        if self.backup_extension.is_empty() {
            return Err(LicenseCheckError::Config(
                "config validation failed: backup_extension must be non-empty".to_string(),
            ));
        }

        for (field, list) in [
            ("src_licenses", &self.src_licenses),
            ("src_licenses_python", &self.src_licenses_python),
            ("test_licenses", &self.test_licenses),
            ("test_licenses_python", &self.test_licenses_python),
        ] {
            if list.is_empty() {
                return Err(LicenseCheckError::Config(format!(
                    "config validation failed: {} must name at least one license file",
                    field
                )));
            }
        }

        self.prune_globset()?;

        Ok(())
    }

    /// Compile `prune_globs` into a matcher.
    pub fn prune_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.prune_globs {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                LicenseCheckError::Config(format!(
                    "invalid glob in prune_globs: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| LicenseCheckError::Config(format!("failed to build prune_globs: {}", e)))
    }

    /// Whether an entry name is on the prune list.
    pub fn is_pruned_name(&self, name: &str) -> bool {
        self.prune.iter().any(|p| p == name)
    }

    /// Whether the file is accepted into the check pipeline.
    pub fn is_checked_file(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions)
    }

    /// Whether the file uses `#` comments for its license header.
    pub fn is_hash_comment_file(&self, path: &Path) -> bool {
        has_extension(path, &self.hash_comment_extensions)
    }

    /// Whether the file is native code subject to the JNI accessor check.
    pub fn is_native_file(&self, path: &Path) -> bool {
        has_extension(path, &self.native_extensions)
    }

    /// Backup path for a file: `<path>.<backup_extension>`.
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.backup_extension);
        PathBuf::from(name)
    }
}

/// Case-sensitive suffix match of the file name against `.<ext>`.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| {
        name.len() > ext.len()
            && name.ends_with(ext.as_str())
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}
