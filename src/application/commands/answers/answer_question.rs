// src/application/commands/answers/answer_question.rs
use super::AnswerCommandService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ResourceKind, ResourceNotFound},
    },
    domain::{
        answer::{Answer, NewAnswer},
        content::Content,
        identity::{AttachmentId, QuestionId, StudentId},
    },
};

pub struct AnswerQuestionCommand {
    pub author_id: StudentId,
    pub question_id: QuestionId,
    pub content: String,
    pub attachment_ids: Vec<AttachmentId>,
}

#[derive(Debug, Clone)]
pub struct AnswerQuestionResponse {
    pub answer: Answer,
}

impl AnswerCommandService {
    pub async fn answer(
        &self,
        command: AnswerQuestionCommand,
    ) -> UseCaseResult<ResourceNotFound, AnswerQuestionResponse> {
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

        let answer = Answer::create(
            NewAnswer {
                author_id: command.author_id,
                question_id: command.question_id,
                content: Content::new(command.content)?,
                attachment_ids: command.attachment_ids,
            },
            self.clock.now(),
        );

        self.attachment_repo
            .create_many(answer.attachments.new_items())
            .await?;
        self.answer_repo.create(&answer).await?;

        tracing::info!(
            answer_id = %answer.id,
            question_id = %answer.question_id,
            "question answered"
        );
        Ok(right(AnswerQuestionResponse { answer }))
    }
}
