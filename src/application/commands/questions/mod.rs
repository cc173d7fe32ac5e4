// src/application/commands/questions/mod.rs
mod choose_best_answer;
mod create;
mod delete;
mod edit;
mod service;

pub use choose_best_answer::{ChooseBestAnswerCommand, ChooseBestAnswerResponse};
pub use create::{CreateQuestionCommand, CreateQuestionResponse};
pub use delete::DeleteQuestionCommand;
pub use edit::{EditQuestionCommand, EditQuestionResponse};
pub use service::QuestionCommandService;
