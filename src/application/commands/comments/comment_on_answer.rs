// src/application/commands/comments/comment_on_answer.rs
use super::{CommentCommandService, CommentResponse};
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ResourceKind, ResourceNotFound},
    },
    domain::{
        comment::CommentTarget,
        identity::{AnswerId, StudentId},
    },
};

pub struct CommentOnAnswerCommand {
    pub author_id: StudentId,
    pub answer_id: AnswerId,
    pub content: String,
}

impl CommentCommandService {
    pub async fn comment_on_answer(
        &self,
        command: CommentOnAnswerCommand,
    ) -> UseCaseResult<ResourceNotFound, CommentResponse> {
        if self
            .answer_repo
            .find_by_id(command.answer_id)
            .await?
            .is_none()
        {
            return Ok(left(ResourceNotFound::new(
                ResourceKind::Answer,
                command.answer_id,
            )));
        }

        let response = self
            .publish_comment(
                command.author_id,
                CommentTarget::Answer(command.answer_id),
                command.content,
            )
            .await?;
        Ok(right(response))
    }
}
