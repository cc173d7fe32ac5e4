// src/application/mod.rs
pub mod commands;
pub mod dto;
pub mod either;
pub mod error;
pub mod failures;
pub mod ports;
pub mod queries;
pub mod services;

pub use either::{Either, UseCaseResult};
pub use error::{ApplicationError, ApplicationResult};
pub use failures::ForumFailure;
