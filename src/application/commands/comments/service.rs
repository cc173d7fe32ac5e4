// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::ClockPort},
    domain::{
        answer::AnswerRepository,
        comment::{Comment, CommentRepository, CommentTarget},
        content::Content,
        identity::StudentId,
        question::QuestionRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CommentResponse {
    pub comment: Comment,
}

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) question_repo: Arc<dyn QuestionRepository>,
    pub(super) answer_repo: Arc<dyn AnswerRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            comment_repo,
            question_repo,
            answer_repo,
            clock,
        }
    }

    /// Any student may comment; there is no ownership check on the target.
    pub(super) async fn publish_comment(
        &self,
        author_id: StudentId,
        target: CommentTarget,
        content: String,
    ) -> ApplicationResult<CommentResponse> {
        let comment = Comment::create(author_id, target, Content::new(content)?, self.clock.now());
        self.comment_repo.create(&comment).await?;

        tracing::info!(comment_id = %comment.id, target = %comment.target, "comment created");
        Ok(CommentResponse { comment })
    }
}
