// src/application/dto/mod.rs
//! Serialisable views handed to the transport layer.

pub mod answers;
pub mod comments;
pub mod questions;
pub mod students;

pub use answers::AnswerDto;
pub use comments::CommentDto;
pub use questions::QuestionDto;
pub use students::{AccessTokenDto, StudentDto};
