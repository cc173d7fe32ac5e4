// src/application/commands/students/authenticate.rs
use super::StudentCommandService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::InvalidCredentials,
        ports::cryptography::TokenPayload,
    },
    domain::student::Email,
};

pub struct AuthenticateStudentCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateStudentResponse {
    pub access_token: String,
}

impl StudentCommandService {
    pub async fn authenticate(
        &self,
        command: AuthenticateStudentCommand,
    ) -> UseCaseResult<InvalidCredentials, AuthenticateStudentResponse> {
        let Ok(email) = Email::new(command.email) else {
            return Ok(left(InvalidCredentials));
        };

        let Some(student) = self.student_repo.find_by_email(&email).await? else {
            tracing::debug!(email = %email, "authentication failed");
            return Ok(left(InvalidCredentials));
        };

        let matches = self
            .hash_comparer
            .compare(&command.password, student.password_hash.as_str())
            .await?;
        if !matches {
            tracing::debug!(email = %email, "authentication failed");
            return Ok(left(InvalidCredentials));
        }

        let access_token = self
            .encrypter
            .encrypt(TokenPayload { sub: student.id })
            .await?;

        tracing::info!(student_id = %student.id, "student authenticated");
        Ok(right(AuthenticateStudentResponse { access_token }))
    }
}
