// src/domain/question/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use crate::domain::identity::QuestionId;
pub use entity::{NewQuestion, Question};
pub use repository::QuestionRepository;
pub use value_objects::QuestionTitle;
