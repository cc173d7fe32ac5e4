// tests/support/mocks/security.rs
use async_trait::async_trait;
use forum_core::application::{
    ApplicationResult,
    ports::cryptography::{Encrypter, HashComparer, HashGenerator, TokenPayload},
};

pub const HASH_PREFIX: &str = "hashed:";

/// Deterministic stand-in for Argon2: prefixes the plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeHasher;

#[async_trait]
impl HashGenerator for FakeHasher {
    async fn hash(&self, plain: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{plain}"))
    }
}

#[async_trait]
impl HashComparer for FakeHasher {
    async fn compare(&self, plain: &str, hash: &str) -> ApplicationResult<bool> {
        Ok(hash == format!("{HASH_PREFIX}{plain}"))
    }
}

/// Serialises the payload as JSON instead of signing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeEncrypter;

#[async_trait]
impl Encrypter for FakeEncrypter {
    async fn encrypt(&self, payload: TokenPayload) -> ApplicationResult<String> {
        Ok(serde_json::json!({ "sub": payload.sub }).to_string())
    }
}
