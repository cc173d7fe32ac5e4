// src/infrastructure/repositories/memory/questions.rs
use super::{lock, newest_first};
use crate::domain::{
    attachment::AttachmentList,
    errors::{DomainError, DomainResult},
    identity::QuestionId,
    pagination::PageParams,
    question::{Question, QuestionRepository},
    slug::Slug,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Enforces slug uniqueness the way a unique index would.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    rows: Mutex<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stored rows keep only the settled attachment set.
fn snapshot(question: &Question) -> Question {
    let mut stored = question.clone();
    stored.attachments = AttachmentList::new(question.attachments.current_items().to_vec());
    stored
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Question>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|q| &q.slug == slug).cloned())
    }

    async fn find_many_recent(&self, params: PageParams) -> DomainResult<Vec<Question>> {
        let rows = lock(&self.rows)?;
        Ok(params.apply(newest_first(rows.iter(), |q| q.created_at)))
    }

    async fn create(&self, question: &Question) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        if rows.iter().any(|q| q.slug == question.slug) {
            return Err(DomainError::conflict(format!(
                "slug '{}' is already taken",
                question.slug
            )));
        }
        rows.push(snapshot(question));
        Ok(())
    }

    async fn save(&self, question: &Question) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        let Some(row) = rows.iter_mut().find(|q| q.id == question.id) else {
            return Err(DomainError::NotFound(format!("question '{}'", question.id)));
        };
        *row = snapshot(question);
        Ok(())
    }

    async fn delete(&self, question: &Question) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        rows.retain(|q| q.id != question.id);
        Ok(())
    }
}
