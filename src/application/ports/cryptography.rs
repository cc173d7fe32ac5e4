// src/application/ports/cryptography.rs
use crate::{application::ApplicationResult, domain::identity::StudentId};
use async_trait::async_trait;

#[async_trait]
pub trait HashGenerator: Send + Sync {
    async fn hash(&self, plain: &str) -> ApplicationResult<String>;
}

#[async_trait]
pub trait HashComparer: Send + Sync {
    /// `Ok(false)` on mismatch; `Err` only when the comparison itself failed.
    async fn compare(&self, plain: &str, hash: &str) -> ApplicationResult<bool>;
}

/// Claims sealed into an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPayload {
    pub sub: StudentId,
}

#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, payload: TokenPayload) -> ApplicationResult<String>;
}
