// src/domain/question/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::identity::QuestionId;
use crate::domain::pagination::PageParams;
use crate::domain::question::entity::Question;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Question>>;
    /// Newest first by creation time.
    async fn find_many_recent(&self, params: PageParams) -> DomainResult<Vec<Question>>;
    async fn create(&self, question: &Question) -> DomainResult<()>;
    async fn save(&self, question: &Question) -> DomainResult<()>;
    async fn delete(&self, question: &Question) -> DomainResult<()>;
}
