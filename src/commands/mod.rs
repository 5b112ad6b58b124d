//! The licensescheck driver.
//!
//! Loads configuration and license bundles, walks the main repository's
//! roots, then any additional repositories named on the command line, and
//! returns the combined error tally.
//!
//! # Steps
//!
//! 1. Resolve the base directory and configuration
//! 2. Load the source and test/example license bundles
//! 3. Walk `src` with the source bundle, `tests` and `examples` with the test bundle
//! 4. Print the main summary
//! 5. For each additional repository: load its single license pair, walk its
//!    `src` and `tests`, print its summary

mod report;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::licenses::LicenseBundle;
use crate::walk::Scanner;
use std::path::{Path, PathBuf};

pub use report::{external_summary, main_summary};

/// Execute a full run. Returns the total error tally.
pub fn run(cli: Cli) -> Result<usize> {
    let config = Config::resolve(&cli.root, cli.config.as_deref())?;
    let scanner = Scanner::new(&config, cli.fix)?;

    let mut errors = check_main_repository(&cli.root, &config, &scanner)?;
    println!(
        "{}",
        main_summary(errors, cli.fix, &config.backup_extension)
    );

    if cli.no_extra_repos {
        return Ok(errors);
    }

    for repo in additional_repositories(&cli.repos, &config) {
        println!("Checking additional repository: {}", repo);
        let repo_errors = check_external_repository(&cli.root, repo, &config, &scanner)?;
        println!("{}", external_summary(repo, repo_errors));
        errors += repo_errors;
    }

    Ok(errors)
}

/// Walk the source roots and test/example roots of the main repository.
pub fn check_main_repository(base: &Path, config: &Config, scanner: &Scanner) -> Result<usize> {
    let source = LicenseBundle::source(base, config)?;
    let test = LicenseBundle::test(base, config)?;

    let mut errors = 0;
    for root in &config.source_roots {
        errors += scanner.scan_root(&base.join(root), &source)?;
    }
    for root in &config.test_roots {
        errors += scanner.scan_root(&base.join(root), &test)?;
    }

    Ok(errors)
}

/// Walk an additional repository, a sibling of the base directory.
pub fn check_external_repository(
    base: &Path,
    repo: &str,
    config: &Config,
    scanner: &Scanner,
) -> Result<usize> {
    let repo_dir = external_repository_dir(base, repo);
    let bundle = LicenseBundle::external(&repo_dir, config)?;

    let mut errors = 0;
    for root in &config.external_roots {
        errors += scanner.scan_root(&repo_dir.join(root), &bundle)?;
    }

    Ok(errors)
}

/// Repository names from the command line, minus the ignored token.
pub fn additional_repositories<'a>(repos: &'a [String], config: &Config) -> Vec<&'a str> {
    repos
        .iter()
        .map(String::as_str)
        .filter(|repo| *repo != config.ignored_repo_token)
        .collect()
}

fn external_repository_dir(base: &Path, repo: &str) -> PathBuf {
    base.join("..").join(repo)
}
