//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for a licensescheck run.
///
/// Built once at start-up and passed by reference through the walk.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // File selection
    // =========================================================================
    /// File extensions accepted into the check pipeline (no leading dots).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extensions checked against the hash-comment (`#`) license rules.
    #[serde(default = "default_hash_comment_extensions")]
    pub hash_comment_extensions: Vec<String>,

    /// Extensions scanned for JNI string accessors.
    #[serde(default = "default_native_extensions")]
    pub native_extensions: Vec<String>,

    /// Entry names skipped during the walk (matched against the bare name).
    #[serde(default = "default_prune")]
    pub prune: Vec<String>,

    /// Extra glob patterns, matched against the path relative to the scanned
    /// root, that prune entries.
    #[serde(default)]
    pub prune_globs: Vec<String>,

    // =========================================================================
    // Repair settings
    // =========================================================================
    /// Extension appended to a file path to name its backup.
    #[serde(default = "default_backup_extension")]
    pub backup_extension: String,

    // =========================================================================
    // Roots and license bundles
    // =========================================================================
    /// Directory holding the approved license texts, relative to the base
    /// directory.
    #[serde(default = "default_licenses_dir")]
    pub licenses_dir: String,

    /// Roots checked against the production-source bundle.
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,

    /// Roots checked against the test/example bundle.
    #[serde(default = "default_test_roots")]
    pub test_roots: Vec<String>,

    #[serde(default = "default_src_licenses")]
    pub src_licenses: Vec<String>,

    #[serde(default = "default_src_licenses_python")]
    pub src_licenses_python: Vec<String>,

    #[serde(default = "default_test_licenses")]
    pub test_licenses: Vec<String>,

    #[serde(default = "default_test_licenses_python")]
    pub test_licenses_python: Vec<String>,

    // =========================================================================
    // External repositories
    // =========================================================================
    /// Block-comment license file inside `<repo>/<licenses_dir>/`.
    #[serde(default = "default_external_license")]
    pub external_license: String,

    /// Hash-comment license file inside `<repo>/<licenses_dir>/`.
    #[serde(default = "default_external_license_python")]
    pub external_license_python: String,

    /// Roots walked inside each external repository.
    #[serde(default = "default_external_roots")]
    pub external_roots: Vec<String>,

    /// Repository argument that is silently ignored.
    #[serde(default = "default_ignored_repo_token")]
    pub ignored_repo_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            hash_comment_extensions: default_hash_comment_extensions(),
            native_extensions: default_native_extensions(),
            prune: default_prune(),
            prune_globs: Vec::new(),
            backup_extension: default_backup_extension(),
            licenses_dir: default_licenses_dir(),
            source_roots: default_source_roots(),
            test_roots: default_test_roots(),
            src_licenses: default_src_licenses(),
            src_licenses_python: default_src_licenses_python(),
            test_licenses: default_test_licenses(),
            test_licenses_python: default_test_licenses_python(),
            external_license: default_external_license(),
            external_license_python: default_external_license_python(),
            external_roots: default_external_roots(),
            ignored_repo_token: default_ignored_repo_token(),
        }
    }
}
