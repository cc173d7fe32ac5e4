// src/lib.rs
//! Use-case core of a Q&A forum.
//!
//! Students register and authenticate, ask questions, answer them, comment on
//! both and pick a best answer. Every use case returns
//! [`application::UseCaseResult`]: the outer `Result` carries infrastructure
//! faults, the inner [`application::Either`] carries the business outcome.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
