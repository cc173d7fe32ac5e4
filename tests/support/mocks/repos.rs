// tests/support/mocks/repos.rs
use async_trait::async_trait;
use forum_core::domain::{
    errors::{DomainError, DomainResult},
    identity::{QuestionId, StudentId},
    pagination::PageParams,
    question::{Question, QuestionRepository},
    slug::Slug,
    student::{Email, Student, StudentRepository},
};

/// Never sees an existing e-mail on lookup but refuses every insert, the way
/// the losing request of a registration race observes storage.
#[derive(Debug, Default)]
pub struct RacingStudentRepo;

#[async_trait]
impl StudentRepository for RacingStudentRepo {
    async fn find_by_id(&self, _id: StudentId) -> DomainResult<Option<Student>> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<Student>> {
        Ok(None)
    }

    async fn create(&self, student: &Student) -> DomainResult<()> {
        Err(DomainError::conflict(format!(
            "email '{}' is already taken",
            student.email
        )))
    }
}

/// Every call fails as if the database were unreachable.
#[derive(Debug, Default)]
pub struct FailingQuestionRepo;

fn outage() -> DomainError {
    DomainError::persistence("connection refused")
}

#[async_trait]
impl QuestionRepository for FailingQuestionRepo {
    async fn find_by_id(&self, _id: QuestionId) -> DomainResult<Option<Question>> {
        Err(outage())
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Question>> {
        Err(outage())
    }

    async fn find_many_recent(&self, _params: PageParams) -> DomainResult<Vec<Question>> {
        Err(outage())
    }

    async fn create(&self, _question: &Question) -> DomainResult<()> {
        Err(outage())
    }

    async fn save(&self, _question: &Question) -> DomainResult<()> {
        Err(outage())
    }

    async fn delete(&self, _question: &Question) -> DomainResult<()> {
        Err(outage())
    }
}
