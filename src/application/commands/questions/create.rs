// src/application/commands/questions/create.rs
use super::QuestionCommandService;
use crate::{
    application::either::{UseCaseResult, right},
    domain::{
        content::Content,
        identity::{AttachmentId, StudentId},
        question::{NewQuestion, Question, QuestionTitle},
    },
};
use std::convert::Infallible;

pub struct CreateQuestionCommand {
    pub author_id: StudentId,
    pub title: String,
    pub content: String,
    pub attachment_ids: Vec<AttachmentId>,
}

#[derive(Debug, Clone)]
pub struct CreateQuestionResponse {
    pub question: Question,
}

impl QuestionCommandService {
    /// Slug uniqueness is left to the storage adapter.
    pub async fn create(
        &self,
        command: CreateQuestionCommand,
    ) -> UseCaseResult<Infallible, CreateQuestionResponse> {
        let new_question = NewQuestion {
            author_id: command.author_id,
            title: QuestionTitle::new(command.title)?,
            content: Content::new(command.content)?,
            attachment_ids: command.attachment_ids,
        };
        let question = Question::create(new_question, self.clock.now())?;

        self.attachment_repo
            .create_many(question.attachments.new_items())
            .await?;
        self.question_repo.create(&question).await?;

        tracing::info!(
            question_id = %question.id,
            slug = %question.slug,
            attachments = question.attachments.len(),
            "question created"
        );
        Ok(right(CreateQuestionResponse { question }))
    }
}
