// src/application/dto/answers.rs
use crate::domain::{
    answer::Answer,
    identity::{AnswerId, AttachmentId, QuestionId, StudentId},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDto {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: StudentId,
    pub content: String,
    pub attachment_ids: Vec<AttachmentId>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Answer> for AnswerDto {
    fn from(answer: Answer) -> Self {
        Self {
            attachment_ids: answer.attachments.attachment_ids(),
            id: answer.id,
            question_id: answer.question_id,
            author_id: answer.author_id,
            content: answer.content.into(),
            created_at: answer.created_at,
            updated_at: answer.updated_at,
        }
    }
}
