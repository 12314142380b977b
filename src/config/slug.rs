//! `[slug]` configuration: separator and substitution rules.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::ConfigError;
use crate::utils::slug::CompiledSubstitution;

/// Separator character for slugs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

/// One ordered substitution rule: regex pattern and replacement text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlugSubstitution {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

impl SlugSubstitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Separator character for spaces.
    pub separator: SlugSeparator,
    /// Substitution rules applied in order before normalization.
    pub substitutions: Vec<SlugSubstitution>,
    /// Rules compiled lazily on first use.
    #[serde(skip)]
    compiled: OnceLock<Vec<CompiledSubstitution>>,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: SlugSeparator::Dash,
            substitutions: vec![
                SlugSubstitution::new(r"[^\w\s-]", ""),
                SlugSubstitution::new(r"[-\s]+", "-"),
            ],
            compiled: OnceLock::new(),
        }
    }
}

impl SlugConfig {
    /// The substitution rules as compiled matchers.
    ///
    /// Rules that fail to compile are skipped here; [`SlugConfig::validate`]
    /// reports them during config validation.
    pub fn compiled(&self) -> &[CompiledSubstitution] {
        self.compiled.get_or_init(|| {
            self.substitutions
                .iter()
                .filter_map(|sub| {
                    CompiledSubstitution::new(&sub.pattern, sub.replacement.as_str()).ok()
                })
                .collect()
        })
    }

    /// Check every substitution pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for sub in &self.substitutions {
            if let Err(source) = regex::Regex::new(&sub.pattern) {
                return Err(ConfigError::SlugPattern {
                    pattern: sub.pattern.clone(),
                    source,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.separator, SlugSeparator::Dash);
        assert_eq!(config.slug.substitutions.len(), 2);
        assert!(config.slug.validate().is_ok());
    }

    #[test]
    fn test_separator_parsing() {
        let config = test_parse_config("[slug]\nseparator = \"underscore\"");
        assert_eq!(config.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.slug.separator.as_char(), '_');

        let config = test_parse_config("[slug]\nseparator = \"dash\"");
        assert_eq!(config.slug.separator.as_char(), '-');
    }

    #[test]
    fn test_substitution_parsing() {
        let config = test_parse_config(
            "[[slug.substitutions]]\npattern = \"&\"\nreplacement = \" and \"\n",
        );
        assert_eq!(
            config.slug.substitutions,
            vec![SlugSubstitution::new("&", " and ")]
        );
        assert_eq!(config.slug.compiled().len(), 1);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = test_parse_config("[[slug.substitutions]]\npattern = \"[unclosed\"\n");
        let err = config.slug.validate().unwrap_err();
        assert!(err.to_string().contains("[unclosed"));
        // compiled() skips the broken rule instead of panicking
        assert!(config.slug.compiled().is_empty());
    }
}
