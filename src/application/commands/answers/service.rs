// src/application/commands/answers/service.rs
use std::sync::Arc;

use crate::{
    application::{
        either::{Either, left, right},
        error::ApplicationResult,
        failures::{ForumFailure, ResourceKind},
        ports::ClockPort,
    },
    domain::{
        answer::{Answer, AnswerRepository},
        attachment::AttachmentRepository,
        comment::CommentRepository,
        identity::{AnswerId, StudentId},
        question::QuestionRepository,
    },
};

pub struct AnswerCommandService {
    pub(super) answer_repo: Arc<dyn AnswerRepository>,
    pub(super) question_repo: Arc<dyn QuestionRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) attachment_repo: Arc<dyn AttachmentRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl AnswerCommandService {
    pub fn new(
        answer_repo: Arc<dyn AnswerRepository>,
        question_repo: Arc<dyn QuestionRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            answer_repo,
            question_repo,
            comment_repo,
            attachment_repo,
            clock,
        }
    }

    pub(super) async fn find_owned_answer(
        &self,
        id: AnswerId,
        actor: StudentId,
    ) -> ApplicationResult<Either<ForumFailure, Answer>> {
        let Some(answer) = self.answer_repo.find_by_id(id).await? else {
            tracing::debug!(answer_id = %id, "answer not found");
            return Ok(left(ForumFailure::not_found(ResourceKind::Answer, id)));
        };

        if !answer.is_authored_by(actor) {
            tracing::debug!(answer_id = %id, actor = %actor, "actor does not own answer");
            return Ok(left(ForumFailure::not_allowed(ResourceKind::Answer, id)));
        }

        Ok(right(answer))
    }
}
