// src/domain/answer/mod.rs
pub mod entity;
pub mod repository;

pub use crate::domain::identity::AnswerId;
pub use entity::{Answer, NewAnswer};
pub use repository::AnswerRepository;
