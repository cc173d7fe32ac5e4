// src/application/queries/mod.rs
pub mod answers;
pub mod comments;
pub mod questions;
