// src/application/commands/questions/edit.rs
use super::QuestionCommandService;
use crate::{
    application::{
        either::{Either, UseCaseResult, left, right},
        failures::ForumFailure,
    },
    domain::{
        attachment::AttachmentParent,
        content::Content,
        identity::{AttachmentId, QuestionId, StudentId},
        question::{Question, QuestionTitle},
    },
};

pub struct EditQuestionCommand {
    pub question_id: QuestionId,
    pub author_id: StudentId,
    pub title: String,
    pub content: String,
    pub attachment_ids: Vec<AttachmentId>,
}

#[derive(Debug, Clone)]
pub struct EditQuestionResponse {
    pub question: Question,
}

impl QuestionCommandService {
    /// Replace title, content and attachments. The slug is not regenerated.
    pub async fn edit(
        &self,
        command: EditQuestionCommand,
    ) -> UseCaseResult<ForumFailure, EditQuestionResponse> {
        let mut question = match self
            .find_owned_question(command.question_id, command.author_id)
            .await?
        {
            Either::Right(question) => question,
            Either::Left(failure) => return Ok(left(failure)),
        };

        let title = QuestionTitle::new(command.title)?;
        let content = Content::new(command.content)?;

        let current = self
            .attachment_repo
            .find_many_by_parent(AttachmentParent::Question(question.id))
            .await?;
        question.load_attachments(current);

        let now = self.clock.now();
        question.set_content(title, content, now);
        question.replace_attachments(&command.attachment_ids, now);

        // links go first so an upload owned elsewhere aborts the edit untouched
        self.attachment_repo
            .create_many(question.attachments.new_items())
            .await?;
        self.attachment_repo
            .delete_many(question.attachments.removed_items())
            .await?;
        self.question_repo.save(&question).await?;

        tracing::info!(
            question_id = %question.id,
            added = question.attachments.new_items().len(),
            removed = question.attachments.removed_items().len(),
            "question edited"
        );
        Ok(right(EditQuestionResponse { question }))
    }
}
