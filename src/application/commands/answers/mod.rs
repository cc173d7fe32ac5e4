// src/application/commands/answers/mod.rs
mod answer_question;
mod delete;
mod edit;
mod service;

pub use answer_question::{AnswerQuestionCommand, AnswerQuestionResponse};
pub use delete::DeleteAnswerCommand;
pub use edit::{EditAnswerCommand, EditAnswerResponse};
pub use service::AnswerCommandService;
