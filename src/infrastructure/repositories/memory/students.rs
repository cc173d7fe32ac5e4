// src/infrastructure/repositories/memory/students.rs
use super::lock;
use crate::domain::{
    errors::{DomainError, DomainResult},
    identity::StudentId,
    student::{Email, Student, StudentRepository},
};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStudentRepository {
    rows: Mutex<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> DomainResult<Option<Student>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Student>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().find(|s| &s.email == email).cloned())
    }

    async fn create(&self, student: &Student) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        if rows.iter().any(|s| s.email == student.email) {
            return Err(DomainError::conflict(format!(
                "email '{}' is already taken",
                student.email
            )));
        }
        rows.push(student.clone());
        Ok(())
    }
}
