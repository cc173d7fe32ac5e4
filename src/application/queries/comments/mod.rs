// src/application/queries/comments/mod.rs
mod fetch;
mod service;

pub use fetch::{FetchAnswerCommentsQuery, FetchCommentsResponse, FetchQuestionCommentsQuery};
pub use service::CommentQueryService;
