//! Summary lines printed after each repository.

/// Summary for the main repository (all of its roots together).
///
/// Output format:
/// ```text
/// SUCCESS. Found 0 license text errors, 0 files containing tabs or trailing whitespace.
/// PROGRESS? Found and tried to fix 3 license text or whitespace errors. ...
/// FAILURE. Found 3 license text or whitespace errors.
/// ```
pub fn main_summary(errors: usize, fix: bool, backup_extension: &str) -> String {
    if errors == 0 {
        success_line()
    } else if fix {
        format!(
            "PROGRESS? Found and tried to fix {} license text or whitespace errors. \
             Re-run licensescheck to validate. Consult .{} files to recover if something went wrong.",
            errors, backup_extension
        )
    } else {
        format!("FAILURE. Found {} license text or whitespace errors.", errors)
    }
}

/// Summary for an additional repository.
pub fn external_summary(repo: &str, errors: usize) -> String {
    if errors == 0 {
        success_line()
    } else {
        format!(
            "FAILURE ({}). Found {} license text or whitespace errors.",
            repo, errors
        )
    }
}

fn success_line() -> String {
    "SUCCESS. Found 0 license text errors, 0 files containing tabs or trailing whitespace."
        .to_string()
}
