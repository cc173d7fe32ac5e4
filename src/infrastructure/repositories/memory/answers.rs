// src/infrastructure/repositories/memory/answers.rs
use super::{lock, newest_first};
use crate::domain::{
    answer::{Answer, AnswerRepository},
    attachment::AttachmentList,
    errors::{DomainError, DomainResult},
    identity::{AnswerId, QuestionId},
    pagination::PageParams,
};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAnswerRepository {
    rows: Mutex<Vec<Answer>>,
}

impl InMemoryAnswerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn snapshot(answer: &Answer) -> Answer {
    let mut stored = answer.clone();
    stored.attachments = AttachmentList::new(answer.attachments.current_items().to_vec());
    stored
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn find_many_by_question_id(
        &self,
        question_id: QuestionId,
        params: PageParams,
    ) -> DomainResult<Vec<Answer>> {
        let rows = lock(&self.rows)?;
        let matching = rows.iter().filter(|a| a.question_id == question_id);
        Ok(params.apply(newest_first(matching, |a| a.created_at)))
    }

    async fn find_all_by_question_id(&self, question_id: QuestionId) -> DomainResult<Vec<Answer>> {
        let rows = lock(&self.rows)?;
        Ok(rows
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn create(&self, answer: &Answer) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        rows.push(snapshot(answer));
        Ok(())
    }

    async fn save(&self, answer: &Answer) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        let Some(row) = rows.iter_mut().find(|a| a.id == answer.id) else {
            return Err(DomainError::NotFound(format!("answer '{}'", answer.id)));
        };
        *row = snapshot(answer);
        Ok(())
    }

    async fn delete(&self, answer: &Answer) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        rows.retain(|a| a.id != answer.id);
        Ok(())
    }
}
