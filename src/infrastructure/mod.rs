// src/infrastructure/mod.rs
pub mod cryptography;
pub mod repositories;
pub mod time;
