// src/domain/student/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use crate::domain::identity::StudentId;
pub use entity::Student;
pub use repository::StudentRepository;
pub use value_objects::{Email, PasswordHash, StudentName};
