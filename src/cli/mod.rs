//! CLI argument parsing for licensescheck.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Verify license headers, tabs, trailing whitespace and banned APIs.
///
/// Walks `src`, `tests` and `examples` under the base directory. Every
/// violation is printed; the exit status is the number of violations found.
/// Positional arguments name additional sibling repositories whose `src`
/// and `tests` are checked against their own license texts.
#[derive(Parser, Debug)]
#[command(name = "licensescheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repair license headers, tabs and trailing whitespace in place.
    ///
    /// The original of each repaired file is kept next to it with a
    /// `.lcbak` extension.
    #[arg(long)]
    pub fix: bool,

    /// Base directory holding `src/`, `tests/`, `examples/` and `tools/`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// YAML configuration file (default: `<root>/tools/licensescheck.yaml` if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore additional repositories (pre-commit hook mode).
    #[arg(long)]
    pub no_extra_repos: bool,

    /// Additional sibling repositories to check.
    pub repos: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
