//! URL slugification with configurable substitution rules.
//!
//! Converts arbitrary text (typically a page title) into a URL-safe path
//! segment: ASCII, lower-case, words joined by a single separator.
//!
//! # Examples
//!
//! ```
//! use plover::utils::slug::{slugify, DEFAULT_SUBSTITUTIONS};
//!
//! assert_eq!(slugify("slug -> slugi -> slugify", &DEFAULT_SUBSTITUTIONS), "slug-slugi-slugify");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Default separator for slug words.
pub const DEFAULT_SEPARATOR: char = '-';

/// A substitution rule compiled into a reusable matcher.
///
/// Rules are applied in order; earlier rules can affect what later
/// patterns match.
#[derive(Debug, Clone)]
pub struct CompiledSubstitution {
    pattern: Regex,
    replacement: String,
}

impl CompiledSubstitution {
    /// Compile a (pattern, replacement) pair.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// The source pattern this rule was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Default substitution rules: strip punctuation, collapse separators.
///
/// Compiled once at first use; the patterns are infallible literals.
pub static DEFAULT_SUBSTITUTIONS: LazyLock<Vec<CompiledSubstitution>> = LazyLock::new(|| {
    [(r"[^\w\s-]", ""), (r"[-\s]+", "-")]
        .into_iter()
        .filter_map(|(pattern, replacement)| CompiledSubstitution::new(pattern, replacement).ok())
        .collect()
});

/// Convert text to a URL-safe slug using `-` as the word separator.
///
/// Total function: any input yields some (possibly empty) string. The
/// output always matches `[a-z0-9-]*` with no leading, trailing, or
/// doubled separator, and `slugify` is idempotent over its own output.
pub fn slugify(text: &str, substitutions: &[CompiledSubstitution]) -> String {
    slugify_with(text, substitutions, DEFAULT_SEPARATOR)
}

/// Convert text to a URL-safe slug with an explicit word separator.
pub fn slugify_with(text: &str, substitutions: &[CompiledSubstitution], separator: char) -> String {
    let mut text = deunicode::deunicode(text);
    for substitution in substitutions {
        text = substitution.apply(&text);
    }
    finalize(&text, separator)
}

/// Normalization pass run after all substitution rules.
///
/// Lower-cases, treats whitespace / `-` / `_` as separator runs, drops
/// anything outside `[a-z0-9]`, joins words with a single separator and
/// strips leading/trailing separators.
fn finalize(text: &str, separator: char) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' || c == '_' {
            // Leading separators are stripped, not merely collapsed
            pending_separator = !slug.is_empty();
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator {
                slug.push(separator);
                pending_separator = false;
            }
            slug.push(c);
        }
    }

    slug
}
