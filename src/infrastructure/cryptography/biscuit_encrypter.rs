// src/infrastructure/cryptography/biscuit_encrypter.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::cryptography::{Encrypter, TokenPayload},
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, Term},
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const ACCESS_TOKEN_CODE: &str = r#"
    user({sub});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now <= {exp};
"#;

/// Seals a [`TokenPayload`] into a base64 Biscuit signed with an Ed25519 root
/// key.
#[derive(Clone)]
pub struct BiscuitEncrypter {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitEncrypter {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    /// Key verifiers need to check tokens issued here.
    pub const fn public_key(&self) -> PublicKey {
        self.public
    }

    fn params(
        payload: TokenPayload,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> HashMap<String, Term> {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("sub".to_string(), payload.sub.to_string().into());
        params.insert("issued".to_string(), issued_at.into());
        params.insert("exp".to_string(), expires_at.into());
        params
    }
}

#[async_trait]
impl Encrypter for BiscuitEncrypter {
    async fn encrypt(&self, payload: TokenPayload) -> ApplicationResult<String> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = Biscuit::builder()
            .code_with_params(
                ACCESS_TOKEN_CODE,
                Self::params(payload, issued_at, expires_at),
                HashMap::new(),
            )
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
