//! Content entity - a page or article plus its front-matter metadata.
//!
//! [`Content`] resolves its derived fields (effective language, author
//! list) once at construction; the pipeline then reads them through
//! accessors and gates publication on
//! [`Content::has_valid_mandatory_properties`].

mod author;
mod meta;

pub use author::{Author, AuthorOrigin};
pub use meta::ContentMetadata;

use crate::config::SiteConfig;
use crate::utils::slug::slugify_with;

/// JSON map preserving insertion order (for unrecognized metadata keys).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A single content item: body text plus metadata and derived fields.
#[derive(Debug, Clone)]
pub struct Content {
    body: String,
    meta: ContentMetadata,
    /// Effective language: metadata `lang` or the site default.
    lang: String,
    /// Resolved author list, see [`Content::authors`].
    authors: Vec<Author>,
}

impl Content {
    /// Build a content item, resolving language and authors against the
    /// site configuration.
    pub fn new(body: impl Into<String>, meta: ContentMetadata, config: &SiteConfig) -> Self {
        let lang = meta
            .lang
            .clone()
            .unwrap_or_else(|| config.site.language.clone());

        // An explicit `authors` list wins over a single `author`
        let authors = if !meta.authors.is_empty() {
            meta.authors.clone()
        } else {
            meta.author.clone().into_iter().collect()
        };

        Self {
            body: body.into(),
            meta,
            lang,
            authors,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn meta(&self) -> &ContentMetadata {
        &self.meta
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    /// Effective language for this item.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The single declared author, if any.
    pub fn author(&self) -> Option<&Author> {
        self.meta.author.as_ref()
    }

    /// Derived author list: the explicit `authors` list when provided,
    /// else the single `author` wrapped in a one-element list, else empty.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// URL slug derived from the title via the configured substitution
    /// rules. `None` when the item has no title.
    pub fn slug(&self, config: &SiteConfig) -> Option<String> {
        let title = self.title()?;
        Some(slugify_with(
            title,
            config.slug.compiled(),
            config.slug.separator.as_char(),
        ))
    }

    /// Whether every configured mandatory metadata field is present and
    /// non-empty. Pure predicate; the caller decides whether a failing
    /// item blocks the build or is skipped with a warning.
    pub fn has_valid_mandatory_properties(&self, config: &SiteConfig) -> bool {
        config
            .content
            .mandatory_properties
            .iter()
            .all(|field| self.meta.has_nonempty(field))
    }
}
