// src/domain/comment/entity.rs
use crate::domain::content::Content;
use crate::domain::identity::{AnswerId, CommentId, QuestionId, StudentId};
use chrono::{DateTime, Utc};
use std::fmt;

/// What a comment is attached to. A comment has exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentTarget {
    Question(QuestionId),
    Answer(AnswerId),
}

impl CommentTarget {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Question(_) => "question",
            Self::Answer(_) => "answer",
        }
    }
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question:{id}"),
            Self::Answer(id) => write!(f, "answer:{id}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: StudentId,
    pub target: CommentTarget,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn create(
        author_id: StudentId,
        target: CommentTarget,
        content: Content,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::new(),
            author_id,
            target,
            content,
            created_at: now,
            updated_at: None,
        }
    }

    pub fn is_authored_by(&self, student_id: StudentId) -> bool {
        self.author_id == student_id
    }
}
