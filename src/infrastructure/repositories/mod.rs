// src/infrastructure/repositories/mod.rs
pub mod memory;

pub use memory::{
    InMemoryAnswerRepository, InMemoryAttachmentRepository, InMemoryCommentRepository,
    InMemoryQuestionRepository, InMemoryStudentRepository,
};
