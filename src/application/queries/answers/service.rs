// src/application/queries/answers/service.rs
use std::sync::Arc;

use crate::domain::answer::AnswerRepository;

pub struct AnswerQueryService {
    pub(super) answer_repo: Arc<dyn AnswerRepository>,
    pub(super) per_page: u32,
}

impl AnswerQueryService {
    pub fn new(answer_repo: Arc<dyn AnswerRepository>, per_page: u32) -> Self {
        Self {
            answer_repo,
            per_page,
        }
    }
}
