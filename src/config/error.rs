//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("invalid slug substitution pattern `{pattern}`")]
    SlugPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let toml_err = toml::from_str::<toml::Value>("[unclosed").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().contains("parsing error"));

        let validation_err = ConfigError::Validation("site.language must not be empty".into());
        assert!(validation_err.to_string().contains("site.language"));
    }
}
