// src/application/queries/questions/service.rs
use std::sync::Arc;

use crate::domain::question::QuestionRepository;

pub struct QuestionQueryService {
    pub(super) question_repo: Arc<dyn QuestionRepository>,
    pub(super) per_page: u32,
}

impl QuestionQueryService {
    pub fn new(question_repo: Arc<dyn QuestionRepository>, per_page: u32) -> Self {
        Self {
            question_repo,
            per_page,
        }
    }
}
