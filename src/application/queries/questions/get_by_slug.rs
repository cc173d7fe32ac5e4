// src/application/queries/questions/get_by_slug.rs
use super::QuestionQueryService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ResourceKind, ResourceNotFound},
    },
    domain::{question::Question, slug::Slug},
};

pub struct GetQuestionBySlugQuery {
    /// Matched as given; callers pass the normalised form.
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct GetQuestionBySlugResponse {
    pub question: Question,
}

impl QuestionQueryService {
    pub async fn get_by_slug(
        &self,
        query: GetQuestionBySlugQuery,
    ) -> UseCaseResult<ResourceNotFound, GetQuestionBySlugResponse> {
        let Ok(slug) = Slug::new(query.slug.as_str()) else {
            return Ok(left(ResourceNotFound::new(ResourceKind::Question, query.slug)));
        };

        match self.question_repo.find_by_slug(&slug).await? {
            Some(question) => Ok(right(GetQuestionBySlugResponse { question })),
            None => Ok(left(ResourceNotFound::new(ResourceKind::Question, slug))),
        }
    }
}
