// src/application/commands/answers/delete.rs
use super::AnswerCommandService;
use crate::{
    application::{
        either::{Either, UseCaseResult, left, right},
        failures::ForumFailure,
    },
    domain::{
        attachment::AttachmentParent,
        comment::CommentTarget,
        identity::{AnswerId, StudentId},
    },
};

pub struct DeleteAnswerCommand {
    pub answer_id: AnswerId,
    pub author_id: StudentId,
}

impl AnswerCommandService {
    /// Deletes comments and attachments first, then the answer. A question that
    /// had this answer as its best answer is left without one.
    pub async fn delete(&self, command: DeleteAnswerCommand) -> UseCaseResult<ForumFailure, ()> {
        let answer = match self
            .find_owned_answer(command.answer_id, command.author_id)
            .await?
        {
            Either::Right(answer) => answer,
            Either::Left(failure) => return Ok(left(failure)),
        };

        self.comment_repo
            .delete_many_by_target(CommentTarget::Answer(answer.id))
            .await?;
        self.attachment_repo
            .delete_many_by_parent(AttachmentParent::Answer(answer.id))
            .await?;
        self.answer_repo.delete(&answer).await?;

        if let Some(mut question) = self.question_repo.find_by_id(answer.question_id).await? {
            if question.best_answer_id == Some(answer.id) {
                question.set_best_answer(None, self.clock.now());
                self.question_repo.save(&question).await?;
                tracing::info!(question_id = %question.id, "best answer cleared");
            }
        }

        tracing::info!(answer_id = %answer.id, "answer deleted");
        Ok(right(()))
    }
}
