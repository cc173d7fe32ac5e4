// src/application/dto/students.rs
use crate::application::commands::students::AuthenticateStudentResponse;
use crate::domain::{identity::StudentId, student::Student};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public view of a student. The password hash is never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDto {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name.into(),
            email: student.email.into(),
            created_at: student.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenDto {
    pub access_token: String,
}

impl From<AuthenticateStudentResponse> for AccessTokenDto {
    fn from(response: AuthenticateStudentResponse) -> Self {
        Self {
            access_token: response.access_token,
        }
    }
}
