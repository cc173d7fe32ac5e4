// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use crate::domain::identity::CommentId;
pub use entity::{Comment, CommentTarget};
pub use repository::CommentRepository;
