// src/application/queries/answers/mod.rs
mod fetch_question_answers;
mod service;

pub use fetch_question_answers::{FetchQuestionAnswersQuery, FetchQuestionAnswersResponse};
pub use service::AnswerQueryService;
