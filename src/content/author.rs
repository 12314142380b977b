//! Author identity for content items.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Where an author value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthorOrigin {
    /// Set explicitly in the content's metadata.
    #[default]
    Explicit,
    /// Filled in from the site's configured default author.
    Default,
}

/// An author: a name tagged with its source of truth.
///
/// Two authors with equal names are still distinct entities when their
/// origins differ, so a metadata-declared author never collides with a
/// settings-defaulted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub origin: AuthorOrigin,
}

impl Author {
    pub fn new(name: impl Into<String>, origin: AuthorOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
        }
    }

    /// An author declared in content metadata.
    pub fn explicit(name: impl Into<String>) -> Self {
        Self::new(name, AuthorOrigin::Explicit)
    }

    /// An author taken from site settings.
    pub fn from_settings(name: impl Into<String>) -> Self {
        Self::new(name, AuthorOrigin::Default)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Front matter usually writes `author: "Tom"`; accept both the bare
/// string and the full `{ name, origin }` form.
impl<'de> Deserialize<'de> for Author {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Full {
                name: String,
                #[serde(default)]
                origin: AuthorOrigin,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Name(name) => Author::explicit(name),
            Repr::Full { name, origin } => Author::new(name, origin),
        })
    }
}
