// src/application/queries/comments/fetch.rs
use super::CommentQueryService;
use crate::{
    application::{
        either::{UseCaseResult, right},
        error::ApplicationResult,
    },
    domain::{
        comment::{Comment, CommentTarget},
        identity::{AnswerId, QuestionId},
        pagination::PageParams,
    },
};
use std::convert::Infallible;

pub struct FetchQuestionCommentsQuery {
    pub question_id: QuestionId,
    pub page: u32,
}

pub struct FetchAnswerCommentsQuery {
    pub answer_id: AnswerId,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchCommentsResponse {
    pub comments: Vec<Comment>,
}

impl CommentQueryService {
    pub async fn fetch_question_comments(
        &self,
        query: FetchQuestionCommentsQuery,
    ) -> UseCaseResult<Infallible, FetchCommentsResponse> {
        let comments = self
            .fetch_page(CommentTarget::Question(query.question_id), query.page)
            .await?;
        Ok(right(FetchCommentsResponse { comments }))
    }

    pub async fn fetch_answer_comments(
        &self,
        query: FetchAnswerCommentsQuery,
    ) -> UseCaseResult<Infallible, FetchCommentsResponse> {
        let comments = self
            .fetch_page(CommentTarget::Answer(query.answer_id), query.page)
            .await?;
        Ok(right(FetchCommentsResponse { comments }))
    }

    async fn fetch_page(&self, target: CommentTarget, page: u32) -> ApplicationResult<Vec<Comment>> {
        let params = PageParams::new(page, self.per_page);
        Ok(self.comment_repo.find_many_by_target(target, params).await?)
    }
}
