// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, CommentTarget};
use crate::domain::errors::DomainResult;
use crate::domain::identity::CommentId;
use crate::domain::pagination::PageParams;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Newest first by creation time.
    async fn find_many_by_target(
        &self,
        target: CommentTarget,
        params: PageParams,
    ) -> DomainResult<Vec<Comment>>;
    async fn create(&self, comment: &Comment) -> DomainResult<()>;
    async fn delete(&self, comment: &Comment) -> DomainResult<()>;
    async fn delete_many_by_target(&self, target: CommentTarget) -> DomainResult<()>;
}
