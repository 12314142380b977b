//! Plover - content utilities for static site generation.
//!
//! The pieces a site-generation pipeline calls while turning source files
//! into pages:
//!
//! - [`utils::slug`]: derive URL-safe slugs from titles, with configurable
//!   substitution rules.
//! - [`utils::date`]: normalize the many textual date shapes authors put
//!   in front matter into one calendar-time value.
//! - [`content`]: the page/article entity, its typed metadata, and the
//!   mandatory-property check that gates publication.
//! - [`config`]: the TOML sections driving the above (default language,
//!   mandatory fields, slug rules).
//!
//! Readers, writers, template rendering, and the rest of the pipeline
//! live elsewhere; everything here is synchronous and side-effect-free.
//!
//! # Example
//!
//! ```
//! use plover::{Content, ContentMetadata, SiteConfig, get_date, slugify};
//! use plover::utils::slug::DEFAULT_SUBSTITUTIONS;
//!
//! let config = SiteConfig::default();
//! let meta: ContentMetadata =
//!     serde_json::from_str(r#"{"title": "Hello, World!", "date": "30.04.2020"}"#).unwrap();
//! let page = Content::new("...", meta, &config);
//!
//! assert!(page.has_valid_mandatory_properties(&config));
//! assert_eq!(page.slug(&config).as_deref(), Some("hello-world"));
//! assert_eq!(page.lang(), "en");
//!
//! let date = get_date(page.meta().date.as_deref().unwrap()).unwrap();
//! assert_eq!((date.year, date.month, date.day), (2020, 4, 30));
//!
//! assert_eq!(slugify("slug -> slugi -> slugify", &DEFAULT_SUBSTITUTIONS), "slug-slugi-slugify");
//! ```

pub mod config;
pub mod content;
pub mod utils;

pub use config::{ConfigError, SiteConfig, SlugConfig, SlugSeparator, SlugSubstitution};
pub use content::{Author, AuthorOrigin, Content, ContentMetadata};
pub use utils::date::{CalendarTime, DateError, UtcOffset, get_date};
pub use utils::slug::{CompiledSubstitution, slugify, slugify_with};
