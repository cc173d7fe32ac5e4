// src/infrastructure/repositories/memory/comments.rs
use super::{lock, newest_first};
use crate::domain::{
    comment::{Comment, CommentRepository, CommentTarget},
    errors::DomainResult,
    identity::CommentId,
    pagination::PageParams,
};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_many_by_target(
        &self,
        target: CommentTarget,
        params: PageParams,
    ) -> DomainResult<Vec<Comment>> {
        let rows = lock(&self.rows)?;
        let matching = rows.iter().filter(|c| c.target == target);
        Ok(params.apply(newest_first(matching, |c| c.created_at)))
    }

    async fn create(&self, comment: &Comment) -> DomainResult<()> {
        lock(&self.rows)?.push(comment.clone());
        Ok(())
    }

    async fn delete(&self, comment: &Comment) -> DomainResult<()> {
        lock(&self.rows)?.retain(|c| c.id != comment.id);
        Ok(())
    }

    async fn delete_many_by_target(&self, target: CommentTarget) -> DomainResult<()> {
        lock(&self.rows)?.retain(|c| c.target != target);
        Ok(())
    }
}
