// src/domain/answer/repository.rs
use crate::domain::answer::entity::Answer;
use crate::domain::errors::DomainResult;
use crate::domain::identity::{AnswerId, QuestionId};
use crate::domain::pagination::PageParams;
use async_trait::async_trait;

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>>;
    /// Newest first by creation time.
    async fn find_many_by_question_id(
        &self,
        question_id: QuestionId,
        params: PageParams,
    ) -> DomainResult<Vec<Answer>>;
    async fn find_all_by_question_id(&self, question_id: QuestionId) -> DomainResult<Vec<Answer>>;
    async fn create(&self, answer: &Answer) -> DomainResult<()>;
    async fn save(&self, answer: &Answer) -> DomainResult<()>;
    async fn delete(&self, answer: &Answer) -> DomainResult<()>;
}
