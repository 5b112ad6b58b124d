//! Approved license texts.
//!
//! License texts are literal header bytes read from files under the
//! configured licenses directory. They are grouped per comment style into a
//! [`LicenseBundle`], and one bundle applies to each scanned root.

use crate::config::Config;
use crate::error::{LicenseCheckError, Result};
use std::path::Path;

/// Comment style that decides which license rules apply to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `#` line comments (scripting files).
    Hash,
    /// `/* */` block comments (compiled-language files).
    Block,
}

impl CommentStyle {
    /// The text a license header of this style must start with.
    pub fn marker(self) -> &'static str {
        match self {
            CommentStyle::Hash => "#",
            CommentStyle::Block => "/*",
        }
    }
}

/// Ordered list of approved header texts for one comment style.
///
/// The last entry is the canonical default inserted by license repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedLicenses {
    texts: Vec<Vec<u8>>,
}

impl ApprovedLicenses {
    /// Build from literal texts. Empty lists are rejected since repair needs
    /// a default header.
    pub fn new<T: Into<Vec<u8>>>(texts: impl IntoIterator<Item = T>) -> Result<Self> {
        let texts: Vec<Vec<u8>> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            return Err(LicenseCheckError::Config(
                "approved license list must not be empty".to_string(),
            ));
        }
        Ok(Self { texts })
    }

    /// Read each file in order.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let text = std::fs::read(path).map_err(|e| LicenseCheckError::read(path, e))?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded license text");
            texts.push(text);
        }
        Self::new(texts)
    }

    /// Whether `content` begins with any approved text (exact, case-sensitive).
    pub fn starts(&self, content: &[u8]) -> bool {
        self.texts.iter().any(|t| content.starts_with(t))
    }

    /// The default header inserted by repair.
    pub fn default_text(&self) -> &[u8] {
        // `new` guarantees at least one entry.
        self.texts.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn texts(&self) -> &[Vec<u8>] {
        &self.texts
    }
}

/// The pair of approved-license lists applied to one scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseBundle {
    pub block: ApprovedLicenses,
    pub hash: ApprovedLicenses,
}

impl LicenseBundle {
    pub fn for_style(&self, style: CommentStyle) -> &ApprovedLicenses {
        match style {
            CommentStyle::Hash => &self.hash,
            CommentStyle::Block => &self.block,
        }
    }

    /// Load a bundle from file names inside `licenses_dir`.
    pub fn load(licenses_dir: &Path, block: &[String], hash: &[String]) -> Result<Self> {
        let block: Vec<_> = block.iter().map(|f| licenses_dir.join(f)).collect();
        let hash: Vec<_> = hash.iter().map(|f| licenses_dir.join(f)).collect();
        let bundle = Self {
            block: ApprovedLicenses::load(block.as_slice())?,
            hash: ApprovedLicenses::load(hash.as_slice())?,
        };
        tracing::debug!(
            dir = %licenses_dir.display(),
            block = bundle.block.texts().len(),
            hash = bundle.hash.texts().len(),
            "loaded license bundle"
        );
        Ok(bundle)
    }

    /// Bundle for production sources of the main repository.
    pub fn source(base: &Path, config: &Config) -> Result<Self> {
        Self::load(
            &base.join(&config.licenses_dir),
            &config.src_licenses,
            &config.src_licenses_python,
        )
    }

    /// Bundle for tests and examples of the main repository.
    pub fn test(base: &Path, config: &Config) -> Result<Self> {
        Self::load(
            &base.join(&config.licenses_dir),
            &config.test_licenses,
            &config.test_licenses_python,
        )
    }

    /// Single-license bundle for an external repository.
    pub fn external(repo: &Path, config: &Config) -> Result<Self> {
        Self::load(
            &repo.join(&config.licenses_dir),
            std::slice::from_ref(&config.external_license),
            std::slice::from_ref(&config.external_license_python),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GPL_BLOCK, GPL_HASH, MIT_BLOCK, write_license_dir};
    use tempfile::TempDir;

    fn approved(texts: &[&str]) -> ApprovedLicenses {
        ApprovedLicenses::new(texts.iter().copied()).unwrap()
    }

    #[test]
    fn starts_requires_exact_prefix() {
        let licenses = approved(&["/* one */\n", "/* two */\n"]);

        assert!(licenses.starts(b"/* one */\nclass A {}"));
        assert!(licenses.starts(b"/* two */\n"));
        assert!(!licenses.starts(b"/* ONE */\nclass A {}"));
        assert!(!licenses.starts(b"/*  one */\n"));
        assert!(!licenses.starts(b" /* one */\n"));
        assert!(!licenses.starts(b"/* one */"));
    }

    #[test]
    fn default_text_is_last_entry() {
        let licenses = approved(&["first", "second", "third"]);
        assert_eq!(licenses.default_text(), b"third");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(ApprovedLicenses::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn bundle_selects_by_style() {
        let bundle = LicenseBundle {
            block: approved(&["/* b */\n"]),
            hash: approved(&["# h\n"]),
        };
        assert_eq!(bundle.for_style(CommentStyle::Block).default_text(), b"/* b */\n");
        assert_eq!(bundle.for_style(CommentStyle::Hash).default_text(), b"# h\n");
        assert_eq!(CommentStyle::Hash.marker(), "#");
        assert_eq!(CommentStyle::Block.marker(), "/*");
    }

    #[test]
    fn source_and_test_bundles_load_from_licenses_dir() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();
        write_license_dir(temp.path(), &config);

        let src = LicenseBundle::source(temp.path(), &config).unwrap();
        assert_eq!(src.block.texts().len(), 4);
        assert_eq!(src.block.default_text(), GPL_BLOCK.as_bytes());
        assert_eq!(src.hash.default_text(), GPL_HASH.as_bytes());

        let test = LicenseBundle::test(temp.path(), &config).unwrap();
        assert_eq!(test.block.default_text(), MIT_BLOCK.as_bytes());
    }

    #[test]
    fn missing_license_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = LicenseBundle::source(temp.path(), &Config::default());
        assert!(matches!(result, Err(LicenseCheckError::Read { .. })));
    }
}
