// src/application/queries/answers/fetch_question_answers.rs
use super::AnswerQueryService;
use crate::{
    application::either::{UseCaseResult, right},
    domain::{answer::Answer, identity::QuestionId, pagination::PageParams},
};
use std::convert::Infallible;

pub struct FetchQuestionAnswersQuery {
    pub question_id: QuestionId,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchQuestionAnswersResponse {
    pub answers: Vec<Answer>,
}

impl AnswerQueryService {
    /// An unknown or deleted question simply has no answers.
    pub async fn fetch_question_answers(
        &self,
        query: FetchQuestionAnswersQuery,
    ) -> UseCaseResult<Infallible, FetchQuestionAnswersResponse> {
        let params = PageParams::new(query.page, self.per_page);
        let answers = self
            .answer_repo
            .find_many_by_question_id(query.question_id, params)
            .await?;
        Ok(right(FetchQuestionAnswersResponse { answers }))
    }
}
