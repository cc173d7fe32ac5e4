// src/application/commands/answers/edit.rs
use super::AnswerCommandService;
use crate::{
    application::{
        either::{Either, UseCaseResult, left, right},
        failures::ForumFailure,
    },
    domain::{
        answer::Answer,
        attachment::AttachmentParent,
        content::Content,
        identity::{AnswerId, AttachmentId, StudentId},
    },
};

pub struct EditAnswerCommand {
    pub answer_id: AnswerId,
    pub author_id: StudentId,
    pub content: String,
    pub attachment_ids: Vec<AttachmentId>,
}

#[derive(Debug, Clone)]
pub struct EditAnswerResponse {
    pub answer: Answer,
}

impl AnswerCommandService {
    pub async fn edit(
        &self,
        command: EditAnswerCommand,
    ) -> UseCaseResult<ForumFailure, EditAnswerResponse> {
        let mut answer = match self
            .find_owned_answer(command.answer_id, command.author_id)
            .await?
        {
            Either::Right(answer) => answer,
            Either::Left(failure) => return Ok(left(failure)),
        };

        let content = Content::new(command.content)?;

        let current = self
            .attachment_repo
            .find_many_by_parent(AttachmentParent::Answer(answer.id))
            .await?;
        answer.load_attachments(current);

        let now = self.clock.now();
        answer.set_content(content, now);
        answer.replace_attachments(&command.attachment_ids, now);

        // links go first so an upload owned elsewhere aborts the edit untouched
        self.attachment_repo
            .create_many(answer.attachments.new_items())
            .await?;
        self.attachment_repo
            .delete_many(answer.attachments.removed_items())
            .await?;
        self.answer_repo.save(&answer).await?;

        tracing::info!(answer_id = %answer.id, "answer edited");
        Ok(right(EditAnswerResponse { answer }))
    }
}
