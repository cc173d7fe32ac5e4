// src/application/dto/comments.rs
use crate::domain::{
    comment::{Comment, CommentTarget},
    identity::{CommentId, StudentId},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: CommentId,
    pub author_id: StudentId,
    pub target_type: &'static str,
    pub target_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        let target_id = match comment.target {
            CommentTarget::Question(id) => Uuid::from(id),
            CommentTarget::Answer(id) => Uuid::from(id),
        };
        Self {
            id: comment.id,
            author_id: comment.author_id,
            target_type: comment.target.kind(),
            target_id,
            content: comment.content.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
