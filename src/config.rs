// src/config.rs
use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Page sizes used by the fetch use cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub questions_per_page: u32,
    pub answers_per_page: u32,
    pub comments_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PAGE_SIZE,
            answers_per_page: DEFAULT_PAGE_SIZE,
            comments_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TokenConfig {
    private_key: Option<String>,
    ttl: Duration,
}

impl TokenConfig {
    /// Hex encoded Ed25519 root key, when configured.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Like [`Self::private_key`] but fails when the key is absent.
    pub fn require_private_key(&self) -> Result<&str, ConfigError> {
        self.private_key()
            .ok_or(ConfigError::Missing("TOKEN_PRIVATE_KEY"))
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[derive(Clone, Debug)]
pub struct ForumConfig {
    pagination: PaginationConfig,
    token: TokenConfig,
}

fn default_token_ttl() -> u64 {
    3600
}

impl ForumConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pagination = PaginationConfig {
            questions_per_page: page_size(&lookup, "QUESTIONS_PER_PAGE")?,
            answers_per_page: page_size(&lookup, "ANSWERS_PER_PAGE")?,
            comments_per_page: page_size(&lookup, "COMMENTS_PER_PAGE")?,
        };

        let private_key = lookup("TOKEN_PRIVATE_KEY").map(|v| v.trim().to_string());
        if let Some(key) = &private_key {
            if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::Invalid(
                    "TOKEN_PRIVATE_KEY must be a 32-byte hex string".into(),
                ));
            }
        }

        let ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("TOKEN_TTL_SECONDS must be an integer, got '{raw}'"))
            })?,
            None => default_token_ttl(),
        };

        Ok(Self {
            pagination,
            token: TokenConfig {
                private_key,
                ttl: Duration::from_secs(ttl_secs),
            },
        })
    }

    pub const fn pagination(&self) -> PaginationConfig {
        self.pagination
    }

    pub const fn token(&self) -> &TokenConfig {
        &self.token
    }
}

fn page_size<F>(lookup: &F, key: &'static str) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(DEFAULT_PAGE_SIZE);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ForumConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.pagination(), PaginationConfig::default());
        assert_eq!(config.pagination().questions_per_page, 20);
        assert!(config.token().private_key().is_none());
        assert_eq!(config.token().ttl(), Duration::from_secs(3600));
        assert!(matches!(
            config.token().require_private_key(),
            Err(ConfigError::Missing("TOKEN_PRIVATE_KEY"))
        ));
    }

    #[test]
    fn page_sizes_are_read_per_collection() {
        let config = ForumConfig::from_lookup(lookup_from(&[
            ("QUESTIONS_PER_PAGE", "10"),
            ("ANSWERS_PER_PAGE", "1"),
        ]))
        .unwrap();

        assert_eq!(config.pagination().questions_per_page, 10);
        assert_eq!(config.pagination().answers_per_page, 1);
        assert_eq!(config.pagination().comments_per_page, 20);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = ForumConfig::from_lookup(lookup_from(&[("COMMENTS_PER_PAGE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("COMMENTS_PER_PAGE")));
    }

    #[test]
    fn private_key_must_be_hex_of_the_right_length() {
        assert!(ForumConfig::from_lookup(lookup_from(&[("TOKEN_PRIVATE_KEY", "abc")])).is_err());

        let key = "11".repeat(32);
        let config =
            ForumConfig::from_lookup(lookup_from(&[("TOKEN_PRIVATE_KEY", key.as_str())])).unwrap();
        assert_eq!(config.token().private_key(), Some(key.as_str()));
    }

    #[test]
    fn ttl_must_be_numeric() {
        assert!(ForumConfig::from_lookup(lookup_from(&[("TOKEN_TTL_SECONDS", "soon")])).is_err());
    }
}
