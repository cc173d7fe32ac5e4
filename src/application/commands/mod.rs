// src/application/commands/mod.rs
pub mod answers;
pub mod comments;
pub mod questions;
pub mod students;
