// src/application/queries/questions/mod.rs
mod fetch_recent;
mod get_by_slug;
mod service;

pub use fetch_recent::{FetchRecentQuestionsQuery, FetchRecentQuestionsResponse};
pub use get_by_slug::{GetQuestionBySlugQuery, GetQuestionBySlugResponse};
pub use service::QuestionQueryService;
