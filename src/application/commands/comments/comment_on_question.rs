// src/application/commands/comments/comment_on_question.rs
use super::{CommentCommandService, CommentResponse};
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ResourceKind, ResourceNotFound},
    },
    domain::{
        comment::CommentTarget,
        identity::{QuestionId, StudentId},
    },
};

pub struct CommentOnQuestionCommand {
    pub author_id: StudentId,
    pub question_id: QuestionId,
    pub content: String,
}

impl CommentCommandService {
    pub async fn comment_on_question(
        &self,
        command: CommentOnQuestionCommand,
    ) -> UseCaseResult<ResourceNotFound, CommentResponse> {
        if self
            .question_repo
            .find_by_id(command.question_id)
            .await?
            .is_none()
        {
            return Ok(left(ResourceNotFound::new(
                ResourceKind::Question,
                command.question_id,
            )));
        }

        let response = self
            .publish_comment(
                command.author_id,
                CommentTarget::Question(command.question_id),
                command.content,
            )
            .await?;
        Ok(right(response))
    }
}
