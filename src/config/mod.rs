//! Feed rendering options.
//!
//! Options can be built in code or loaded from a small TOML file:
//!
//! ```toml
//! site_url = "https://www.example.com"
//! minify = false
//! ```
//!
//! | Key        | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `site_url` | Base for every canonical link (`siteUrl` also works) |
//! | `minify`   | Strip indentation and line breaks from the output    |

mod error;

pub use error::ConfigError;

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Options for [`crate::render_feed`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedOptions {
    /// Site root without trailing slash, e.g. `https://www.example.com`.
    ///
    /// Joined verbatim with `/podcasts/{slug}`.
    #[serde(alias = "siteUrl")]
    pub site_url: String,

    /// Minify the rendered XML.
    #[serde(default)]
    pub minify: bool,
}

impl FeedOptions {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            minify: false,
        }
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Load options from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (options, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse feed options from {}", path.display()))?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        options
            .validate()
            .with_context(|| format!("Invalid feed options in {}", path.display()))?;
        Ok(options)
    }

    /// Parse and validate options from TOML text, warning about unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (options, ignored) = Self::parse_with_ignored(content)?;
        for field in &ignored {
            log!("warning"; "ignoring unknown option `{}`", field);
        }
        options.validate()?;
        Ok(options)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let options = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((options, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check that the options can produce absolute links.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_url.trim().is_empty() {
            return Err(ConfigError::Validation("site_url must not be empty".into()));
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_toml_str_minimal() {
        let options = FeedOptions::from_toml_str("site_url = \"https://www.my-test-site.com\"")
            .unwrap();
        assert_eq!(options, FeedOptions::new("https://www.my-test-site.com"));
        assert!(!options.minify);
    }

    #[test]
    fn test_from_toml_str_camel_case_alias() {
        let options =
            FeedOptions::from_toml_str("siteUrl = \"https://example.com\"\nminify = true").unwrap();
        assert_eq!(options.site_url, "https://example.com");
        assert!(options.minify);
    }

    #[test]
    fn test_from_toml_str_unknown_field_ignored() {
        let options =
            FeedOptions::from_toml_str("site_url = \"https://example.com\"\ntheme = \"dark\"")
                .unwrap();
        assert_eq!(options.site_url, "https://example.com");
    }

    #[test]
    fn test_from_toml_str_missing_site_url() {
        let result = FeedOptions::from_toml_str("minify = true");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_toml_str_invalid_toml() {
        assert!(FeedOptions::from_toml_str("site_url = ").is_err());
    }

    #[test]
    fn test_from_toml_str_empty_site_url() {
        for content in ["site_url = \"\"", "siteUrl = \"   \"\nminify = true"] {
            assert!(matches!(
                FeedOptions::from_toml_str(content),
                Err(ConfigError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_validate() {
        assert!(FeedOptions::new("https://example.com").validate().is_ok());
        assert!(matches!(
            FeedOptions::new("  ").validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_url = \"https://example.com\"\nminify = true").unwrap();

        let options = FeedOptions::from_path(file.path()).unwrap();
        assert_eq!(options, FeedOptions::new("https://example.com").with_minify(true));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FeedOptions::from_path(&dir.path().join("feed.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_from_path_empty_site_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_url = \"\"").unwrap();

        let err = FeedOptions::from_path(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_from_path_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_url = ").unwrap();

        let err = FeedOptions::from_path(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse feed options"));
        assert!(message.contains(&file.path().display().to_string()));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }
}
