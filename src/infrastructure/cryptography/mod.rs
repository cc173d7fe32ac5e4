// src/infrastructure/cryptography/mod.rs
mod argon2_hasher;
mod biscuit_encrypter;

pub use argon2_hasher::Argon2Hasher;
pub use biscuit_encrypter::BiscuitEncrypter;
