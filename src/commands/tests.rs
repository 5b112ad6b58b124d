//! Tests for the driver.

use super::*;
use crate::error::LicenseCheckError;
use crate::test_support::{
    EXT_BLOCK, EXT_HASH, GPL_BLOCK, GPL_HASH, MIT_BLOCK, MIT_HASH, create_roots, read_file,
    write_external_license_dir, write_file, write_license_dir,
};
use tempfile::TempDir;

/// Lay out `<temp>/voltdb` with license texts and empty roots.
fn setup_main_repo(temp: &TempDir) -> PathBuf {
    let base = temp.path().join("voltdb");
    let config = Config::default();
    write_license_dir(&base, &config);
    create_roots(&base, &config);
    base
}

fn cli(base: &Path, fix: bool, repos: &[&str]) -> Cli {
    Cli {
        fix,
        root: base.to_path_buf(),
        config: None,
        no_extra_repos: false,
        repos: repos.iter().map(|s| s.to_string()).collect(),
    }
}

fn count_backups(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().to_string_lossy().ends_with(".lcbak"))
        .count()
}

#[test]
fn test_clean_tree_succeeds_without_backups() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    write_file(&base, "src/org/voltdb/A.java", &format!("{}class A {{}}\n", GPL_BLOCK));
    write_file(&base, "src/ee/a.cpp", &format!("{}int a;\n", GPL_BLOCK));
    write_file(&base, "tests/T.java", &format!("{}class T {{}}\n", MIT_BLOCK));
    write_file(&base, "tests/t.py", &format!("{}x = 1\n", MIT_HASH));
    write_file(&base, "examples/e/run.py", &format!("#!/usr/bin/env python\n{}", MIT_HASH));
    write_file(&base, "src/tool.py", &format!("{}y = 2\n", GPL_HASH));

    assert_eq!(run(cli(&base, false, &[])).unwrap(), 0);
    assert_eq!(run(cli(&base, true, &[])).unwrap(), 0);
    assert_eq!(count_backups(&base), 0);
}

#[test]
fn test_roots_use_their_own_bundle() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    // Test header under src/ and source header under tests/ are both wrong.
    write_file(&base, "src/A.java", &format!("{}class A {{}}\n", MIT_BLOCK));
    write_file(&base, "tests/T.java", &format!("{}class T {{}}\n", GPL_BLOCK));
    write_file(&base, "examples/E.java", &format!("{}class E {{}}\n", MIT_BLOCK));

    let config = Config::default();
    let scanner = Scanner::new(&config, false).unwrap();
    assert_eq!(check_main_repository(&base, &config, &scanner).unwrap(), 2);
}

#[test]
fn test_non_default_approved_header_is_accepted() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    // write_license_dir gives each non-default file a "/* <name> */" header.
    write_file(
        &base,
        "src/A.java",
        "/* gpl3_evanjones_and_voltdb.txt */\nclass A {}\n",
    );

    assert_eq!(run(cli(&base, false, &[])).unwrap(), 0);
}

#[test]
fn test_fix_inserts_class_specific_default() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    write_file(&base, "src/A.java", "class A {}\n");
    write_file(&base, "examples/b.py", "print(1)\n");

    assert_eq!(run(cli(&base, true, &[])).unwrap(), 2);
    assert_eq!(
        read_file(&base, "src/A.java"),
        format!("{}class A {{}}\n", GPL_BLOCK)
    );
    assert_eq!(
        read_file(&base, "examples/b.py"),
        format!("{}print(1)\n", MIT_HASH)
    );
    assert_eq!(read_file(&base, "src/A.java.lcbak"), "class A {}\n");

    assert_eq!(run(cli(&base, true, &[])).unwrap(), 0);
}

#[test]
fn test_external_repository_adds_to_tally() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    write_file(&base, "src/A.java", "class A {}\n");

    let pro = temp.path().join("pro");
    write_external_license_dir(&pro, &Config::default());
    write_file(&pro, "src/P.java", "class P {}\n");
    write_file(&pro, "src/ok.py", &format!("{}x = 1\n", EXT_HASH));
    write_file(&pro, "tests/T.java", &format!("{}class T {{}}\n", EXT_BLOCK));
    write_file(&pro, "tests/t.cpp", &format!("{}sprintf(); sprintf();\n", EXT_BLOCK));

    // main: 1, pro: 1 (license) + 2 (sprintf)
    assert_eq!(run(cli(&base, false, &["pro"])).unwrap(), 4);
}

#[test]
fn test_sentinel_and_hook_mode_skip_external_repositories() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);

    // Neither repository exists; skipping them must not fail the run.
    assert_eq!(run(cli(&base, false, &["${voltpro}"])).unwrap(), 0);

    let mut hook = cli(&base, false, &["missing-repo"]);
    hook.no_extra_repos = true;
    assert_eq!(run(hook).unwrap(), 0);
}

#[test]
fn test_missing_external_license_is_fatal() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);

    let result = run(cli(&base, false, &["missing-repo"]));
    assert!(matches!(result, Err(LicenseCheckError::Read { .. })));
}

#[test]
fn test_missing_bundle_is_fatal() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("voltdb");
    create_roots(&base, &Config::default());

    let result = run(cli(&base, false, &[]));
    assert!(matches!(result, Err(LicenseCheckError::Read { .. })));
}

#[test]
fn test_config_file_under_tools_is_honored() {
    let temp = TempDir::new().unwrap();
    let base = setup_main_repo(&temp);
    write_file(&base, "src/vendor/V.java", "class V {}\n");
    write_file(&base, "tools/licensescheck.yaml", "prune_globs: ['vendor']\n");

    assert_eq!(run(cli(&base, false, &[])).unwrap(), 0);
}

#[test]
fn test_additional_repositories_filters_sentinel() {
    let config = Config::default();
    let repos = vec![
        "pro".to_string(),
        "${voltpro}".to_string(),
        "other".to_string(),
    ];
    assert_eq!(additional_repositories(&repos, &config), vec!["pro", "other"]);
}

#[test]
fn test_summary_lines() {
    assert_eq!(
        main_summary(0, true, "lcbak"),
        "SUCCESS. Found 0 license text errors, 0 files containing tabs or trailing whitespace."
    );
    assert_eq!(
        main_summary(3, false, "lcbak"),
        "FAILURE. Found 3 license text or whitespace errors."
    );
    assert_eq!(
        main_summary(3, true, "lcbak"),
        "PROGRESS? Found and tried to fix 3 license text or whitespace errors. \
         Re-run licensescheck to validate. Consult .lcbak files to recover if something went wrong."
    );
    assert_eq!(
        external_summary("pro", 0),
        main_summary(0, false, "lcbak")
    );
    assert_eq!(
        external_summary("pro", 2),
        "FAILURE (pro). Found 2 license text or whitespace errors."
    );
}
