//! Site configuration for the content utilities.
//!
//! # Sections
//!
//! | Section     | Purpose                                              |
//! |-------------|------------------------------------------------------|
//! | `[site]`    | Site metadata (title, default author, language)      |
//! | `[content]` | Mandatory metadata fields for publishable content    |
//! | `[slug]`    | Slug separator and substitution rules                |
//!
//! Configuration discovery and merging belong to the surrounding pipeline;
//! this module only parses and validates a TOML document.

mod error;
mod slug;

pub use error::ConfigError;
pub use slug::{SlugConfig, SlugSeparator, SlugSubstitution};

use serde::{Deserialize, Serialize};

/// `[site]` section: site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,
    /// Default author name.
    pub author: String,
    /// Default language code (e.g., "en", "zh-Hans").
    pub language: String,
    /// Custom fields.
    #[serde(default)]
    pub extra: std::collections::BTreeMap<String, toml::Value>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            language: "en".into(),
            extra: Default::default(),
        }
    }
}

/// `[content]` section: publication gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// Metadata fields that must be present and non-empty before a
    /// content item is considered publishable.
    pub mandatory_properties: Vec<String>,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            mandatory_properties: vec!["title".into()],
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub content: ContentSection,
    pub slug: SlugConfig,
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// Unknown fields are logged as warnings and returned so the caller
    /// can decide how strict to be.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        for field in &ignored {
            tracing::warn!("ignoring unknown config field: {field}");
        }
        Ok((config, ignored))
    }

    /// Validate the parsed configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.language must not be empty".into(),
            ));
        }
        if let Some(field) = self
            .content
            .mandatory_properties
            .iter()
            .find(|f| f.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "content.mandatory_properties contains an empty field name: `{field}`"
            )));
        }
        self.slug.validate()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.content.mandatory_properties, vec!["title"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections() {
        let config = test_parse_config(
            "[site]\ntitle = \"My Blog\"\nauthor = \"Blogger\"\nlanguage = \"fr\"\n\n[content]\nmandatory_properties = [\"title\", \"date\"]\n",
        );
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.site.author, "Blogger");
        assert_eq!(config.site.language, "fr");
        assert_eq!(config.content.mandatory_properties, vec!["title", "date"]);
    }

    #[test]
    fn test_site_extra_fields() {
        let config = test_parse_config("[site.extra]\ntwitter = \"@blogger\"");
        assert_eq!(
            config.site.extra.get("twitter").and_then(|v| v.as_str()),
            Some("@blogger")
        );
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown_fields() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[site]\ntitle = \"X\"\nnot_a_field = 1\n").unwrap();
        assert_eq!(ignored, vec!["site.not_a_field"]);
    }

    #[test]
    fn test_validate_empty_language() {
        let config = test_parse_config("[site]\nlanguage = \"\"");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_empty_mandatory_field_name() {
        let config = test_parse_config("[content]\nmandatory_properties = [\"title\", \"\"]");
        assert!(config.validate().is_err());
    }
}
