// src/application/commands/questions/choose_best_answer.rs
use super::QuestionCommandService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ForumFailure, ResourceKind},
    },
    domain::{
        identity::{AnswerId, StudentId},
        question::Question,
    },
};

pub struct ChooseBestAnswerCommand {
    pub author_id: StudentId,
    pub answer_id: AnswerId,
}

#[derive(Debug, Clone)]
pub struct ChooseBestAnswerResponse {
    pub question: Question,
}

impl QuestionCommandService {
    /// Only the author of the question may pick its best answer.
    pub async fn choose_best_answer(
        &self,
        command: ChooseBestAnswerCommand,
    ) -> UseCaseResult<ForumFailure, ChooseBestAnswerResponse> {
        let Some(answer) = self.answer_repo.find_by_id(command.answer_id).await? else {
            return Ok(left(ForumFailure::not_found(
                ResourceKind::Answer,
                command.answer_id,
            )));
        };

        let Some(mut question) = self.question_repo.find_by_id(answer.question_id).await? else {
            return Ok(left(ForumFailure::not_found(
                ResourceKind::Question,
                answer.question_id,
            )));
        };

        if !question.is_authored_by(command.author_id) {
            tracing::debug!(
                question_id = %question.id,
                actor = %command.author_id,
                "best answer rejected, actor does not own question"
            );
            return Ok(left(ForumFailure::not_allowed(
                ResourceKind::Question,
                question.id,
            )));
        }

        question.set_best_answer(Some(answer.id), self.clock.now());
        self.question_repo.save(&question).await?;

        tracing::info!(question_id = %question.id, answer_id = %answer.id, "best answer chosen");
        Ok(right(ChooseBestAnswerResponse { question }))
    }
}
