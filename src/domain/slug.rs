// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-safe identifier derived from a title.
///
/// Produced by [`Slug::from_text`]: lowercase ASCII, diacritics transliterated,
/// every run of non-alphanumeric characters collapsed into one `-`, no
/// leading or trailing hyphen. Re-slugifying a slug yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wrap an already normalised slug, e.g. one read back from storage.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn from_text(text: &str) -> DomainResult<Self> {
        Self::new(::slug::slugify(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
