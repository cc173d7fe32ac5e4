// src/domain/student/entity.rs
use crate::domain::identity::StudentId;
use crate::domain::student::value_objects::{Email, PasswordHash, StudentName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: StudentName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn create(
        name: StudentName,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: StudentId::new(),
            name,
            email,
            password_hash,
            created_at,
        }
    }
}
