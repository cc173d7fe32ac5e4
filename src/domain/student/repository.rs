// src/domain/student/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::identity::StudentId;
use crate::domain::student::{entity::Student, value_objects::Email};
use async_trait::async_trait;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: StudentId) -> DomainResult<Option<Student>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Student>>;

    /// Persist a new student. Adapters that enforce e-mail uniqueness report a
    /// violation as [`crate::domain::errors::DomainError::Conflict`].
    async fn create(&self, student: &Student) -> DomainResult<()>;
}
