//! Configuration defaults for licensescheck.
//!
//! This module defines the constants and default value functions used by the
//! Config struct.

/// Config file loaded from the base directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tools/licensescheck.yaml";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// File extensions accepted into the check pipeline (no leading dots).
pub fn default_extensions() -> Vec<String> {
    strings(&["java", "cpp", "cc", "h", "hpp", "py"])
}

/// Extensions whose files use `#` comments instead of `/* */`.
pub fn default_hash_comment_extensions() -> Vec<String> {
    strings(&["py"])
}

/// Extensions of native code scanned for JNI string accessors.
pub fn default_native_extensions() -> Vec<String> {
    strings(&["cpp", "c", "h", "hpp"])
}

/// Third-party and generated entries that are never visited.
pub fn default_prune() -> Vec<String> {
    strings(&[
        "hsqldb19b3",
        "hsqldb",
        "jetty716",
        "proj_gen",
        "jni_md.h",
        "jni.h",
        "org_voltdb_jni_ExecutionEngine.h",
        "org_voltcore_utils_DBBPool.h",
        "org_voltcore_utils_DBBPool_DBBContainer.h",
        "simplejson",
        "projectfile",
        "deploymentfile",
        "xml",
        "helloworld",
        "jaxb",
        "pmsg",
    ])
}

pub fn default_backup_extension() -> String {
    "lcbak".to_string()
}

pub fn default_licenses_dir() -> String {
    "tools/approved_licenses".to_string()
}

pub fn default_source_roots() -> Vec<String> {
    strings(&["src"])
}

pub fn default_test_roots() -> Vec<String> {
    strings(&["tests", "examples"])
}

/// Block-comment headers for production sources. The last entry is the
/// default inserted by license repair.
pub fn default_src_licenses() -> Vec<String> {
    strings(&[
        "gpl3_hstore_and_voltdb.txt",
        "gpl3_evanjones_and_voltdb.txt",
        "gpl3_base64_and_voltdb.txt",
        "gpl3_voltdb.txt",
    ])
}

pub fn default_src_licenses_python() -> Vec<String> {
    strings(&["gpl3_voltdb_python.txt"])
}

/// Block-comment headers for tests and examples. The last entry is the
/// default inserted by license repair.
pub fn default_test_licenses() -> Vec<String> {
    strings(&[
        "mit_x11_hstore_and_voltdb.txt",
        "mit_x11_evanjones_and_voltdb.txt",
        "mit_x11_michaelmccanna_and_voltdb.txt",
        "mit_x11_voltdb.txt",
    ])
}

pub fn default_test_licenses_python() -> Vec<String> {
    strings(&["mit_x11_voltdb_python.txt"])
}

pub fn default_external_license() -> String {
    "license.txt".to_string()
}

pub fn default_external_license_python() -> String {
    "license_python.txt".to_string()
}

pub fn default_external_roots() -> Vec<String> {
    strings(&["src", "tests"])
}

/// Literal token passed through by build scripts when the repository
/// property is unset.
pub fn default_ignored_repo_token() -> String {
    "${voltpro}".to_string()
}
