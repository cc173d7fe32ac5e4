// src/application/queries/questions/fetch_recent.rs
use super::QuestionQueryService;
use crate::{
    application::either::{UseCaseResult, right},
    domain::{pagination::PageParams, question::Question},
};
use std::convert::Infallible;

pub struct FetchRecentQuestionsQuery {
    /// 1-based; `0` is read as the first page.
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchRecentQuestionsResponse {
    pub questions: Vec<Question>,
}

impl QuestionQueryService {
    pub async fn fetch_recent(
        &self,
        query: FetchRecentQuestionsQuery,
    ) -> UseCaseResult<Infallible, FetchRecentQuestionsResponse> {
        let params = PageParams::new(query.page, self.per_page);
        let questions = self.question_repo.find_many_recent(params).await?;
        Ok(right(FetchRecentQuestionsResponse { questions }))
    }
}
