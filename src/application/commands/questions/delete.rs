// src/application/commands/questions/delete.rs
use super::QuestionCommandService;
use crate::{
    application::{
        either::{Either, UseCaseResult, left, right},
        failures::ForumFailure,
    },
    domain::{
        attachment::AttachmentParent,
        comment::CommentTarget,
        identity::{QuestionId, StudentId},
    },
};

pub struct DeleteQuestionCommand {
    pub question_id: QuestionId,
    pub author_id: StudentId,
}

impl QuestionCommandService {
    /// Removes the question together with everything hanging off it, in the
    /// order comments, answers, attachments, question.
    pub async fn delete(&self, command: DeleteQuestionCommand) -> UseCaseResult<ForumFailure, ()> {
        let question = match self
            .find_owned_question(command.question_id, command.author_id)
            .await?
        {
            Either::Right(question) => question,
            Either::Left(failure) => return Ok(left(failure)),
        };

        self.comment_repo
            .delete_many_by_target(CommentTarget::Question(question.id))
            .await?;

        let answers = self.answer_repo.find_all_by_question_id(question.id).await?;
        for answer in &answers {
            self.comment_repo
                .delete_many_by_target(CommentTarget::Answer(answer.id))
                .await?;
            self.attachment_repo
                .delete_many_by_parent(AttachmentParent::Answer(answer.id))
                .await?;
            self.answer_repo.delete(answer).await?;
        }

        self.attachment_repo
            .delete_many_by_parent(AttachmentParent::Question(question.id))
            .await?;
        self.question_repo.delete(&question).await?;

        tracing::info!(
            question_id = %question.id,
            answers = answers.len(),
            "question deleted"
        );
        Ok(right(()))
    }
}
