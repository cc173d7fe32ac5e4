// src/application/dto/questions.rs
use crate::domain::{
    identity::{AnswerId, AttachmentId, QuestionId, StudentId},
    question::Question,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: QuestionId,
    pub author_id: StudentId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub best_answer_id: Option<AnswerId>,
    pub attachment_ids: Vec<AttachmentId>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            excerpt: question.excerpt(),
            attachment_ids: question.attachments.attachment_ids(),
            id: question.id,
            author_id: question.author_id,
            title: question.title.into(),
            slug: question.slug.into(),
            content: question.content.into(),
            best_answer_id: question.best_answer_id,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}
