//! Violation types reported by the rule checks.

use std::fmt;
use std::path::PathBuf;

/// A single rule violation found in a file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Content does not start with the comment marker at all.
    MissingComment,
    /// The comment marker is preceded by whitespace.
    WhitespaceBeforeComment,
    /// The leading comment is not one of the approved license texts.
    UnapprovedLicense,
    /// Content holds this many tab characters.
    Tabs(usize),
    /// Some line ends in space, tab, form feed or vertical tab.
    TrailingWhitespace,
    /// Content holds this many `sprintf` occurrences.
    Sprintf(usize),
    /// Content holds this many `GetStringChars`/`GetStringUTFChars` occurrences.
    JniStringChars(usize),
}

impl Violation {
    /// Contribution of this violation to the error tally.
    ///
    /// Banned-API violations count every occurrence; the rest count once.
    pub fn weight(&self) -> usize {
        match self {
            Violation::Sprintf(n) | Violation::JniStringChars(n) => *n,
            _ => 1,
        }
    }

    /// Whether fix mode has a repair for this violation.
    pub fn is_repairable(&self) -> bool {
        !matches!(self, Violation::Sprintf(_) | Violation::JniStringChars(_))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingComment => write!(f, "does not begin with a comment."),
            Violation::WhitespaceBeforeComment => {
                write!(f, "contains whitespace before initial comment.")
            }
            Violation::UnapprovedLicense => write!(f, "does not start with an approved license."),
            Violation::Tabs(n) => write!(f, "contains {} tabs.", n),
            Violation::TrailingWhitespace => write!(f, "contains trailing whitespace."),
            Violation::Sprintf(n) => {
                write!(f, "contains {} calls to sprintf(). Use snprintf().", n)
            }
            Violation::JniStringChars(n) => write!(
                f,
                "contains {} calls to GetStringChars/GetStringUTFChars. \
                 These methods return invalid UTF-8 code points for some characters. \
                 You should do the encoding in Java and pass the string to native code as a byte array.",
                n
            ),
        }
    }
}

/// A violation tied to the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationReport {
    pub path: PathBuf,
    pub violation: Violation,
}

impl ViolationReport {
    pub fn new(path: impl Into<PathBuf>, violation: Violation) -> Self {
        Self {
            path: path.into(),
            violation,
        }
    }
}

/// Output format:
/// ```text
/// ERROR: "src/ee/common/tabs.h" contains 3 tabs.
/// ```
impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: \"{}\" {}", self.path.display(), self.violation)
    }
}
