// src/application/commands/questions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        either::{Either, left, right},
        error::ApplicationResult,
        failures::{ForumFailure, ResourceKind},
        ports::ClockPort,
    },
    domain::{
        answer::AnswerRepository,
        attachment::AttachmentRepository,
        comment::CommentRepository,
        identity::{QuestionId, StudentId},
        question::{Question, QuestionRepository},
    },
};

pub struct QuestionCommandService {
    pub(super) question_repo: Arc<dyn QuestionRepository>,
    pub(super) answer_repo: Arc<dyn AnswerRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) attachment_repo: Arc<dyn AttachmentRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl QuestionCommandService {
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            question_repo,
            answer_repo,
            comment_repo,
            attachment_repo,
            clock,
        }
    }

    /// Load a question the actor is allowed to modify.
    pub(super) async fn find_owned_question(
        &self,
        id: QuestionId,
        actor: StudentId,
    ) -> ApplicationResult<Either<ForumFailure, Question>> {
        let Some(question) = self.question_repo.find_by_id(id).await? else {
            tracing::debug!(question_id = %id, "question not found");
            return Ok(left(ForumFailure::not_found(ResourceKind::Question, id)));
        };

        if !question.is_authored_by(actor) {
            tracing::debug!(question_id = %id, actor = %actor, "actor does not own question");
            return Ok(left(ForumFailure::not_allowed(ResourceKind::Question, id)));
        }

        Ok(right(question))
    }
}
