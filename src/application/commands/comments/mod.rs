// src/application/commands/comments/mod.rs
mod comment_on_answer;
mod comment_on_question;
mod delete;
mod service;

pub use comment_on_answer::CommentOnAnswerCommand;
pub use comment_on_question::CommentOnQuestionCommand;
pub use delete::DeleteCommentCommand;
pub use service::{CommentCommandService, CommentResponse};
