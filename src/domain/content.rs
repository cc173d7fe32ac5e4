// src/domain/content.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Body text of a question, answer or comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("content cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `max_chars` characters, trimmed, with an ellipsis when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.0.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Content> for String {
    fn from(value: Content) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_rejected() {
        assert!(Content::new("   ").is_err());
    }

    #[test]
    fn excerpt_cuts_long_text() {
        let content = Content::new("abcdef ghij").unwrap();
        assert_eq!(content.excerpt(7), "abcdef...");
        assert_eq!(content.excerpt(50), "abcdef ghij");
    }
}
