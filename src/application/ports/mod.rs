// src/application/ports/mod.rs
pub mod cryptography;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type HashGeneratorPort = dyn cryptography::HashGenerator;
pub type HashComparerPort = dyn cryptography::HashComparer;
pub type EncrypterPort = dyn cryptography::Encrypter;
pub type ClockPort = dyn time::Clock;
