// src/application/commands/students/register.rs
use super::StudentCommandService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::StudentAlreadyExists,
    },
    domain::student::{Email, PasswordHash, Student, StudentName},
};

pub struct RegisterStudentCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterStudentResponse {
    pub student: Student,
}

impl StudentCommandService {
    pub async fn register(
        &self,
        command: RegisterStudentCommand,
    ) -> UseCaseResult<StudentAlreadyExists, RegisterStudentResponse> {
        let name = StudentName::new(command.name)?;
        let email = Email::new(command.email)?;

        if self.student_repo.find_by_email(&email).await?.is_some() {
            tracing::debug!(email = %email, "registration rejected, email already in use");
            return Ok(left(StudentAlreadyExists {
                email: email.into(),
            }));
        }

        let hashed = self.hash_generator.hash(&command.password).await?;
        let student = Student::create(name, email, PasswordHash::new(hashed)?, self.clock.now());

        // The lookup above and this insert are not atomic; storage that
        // enforces unique e-mails reports the loser of a race as a conflict.
        if let Err(err) = self.student_repo.create(&student).await {
            if err.is_conflict() {
                tracing::warn!(email = %student.email, "email uniqueness violated on insert");
                return Ok(left(StudentAlreadyExists {
                    email: student.email.into(),
                }));
            }
            return Err(err.into());
        }

        tracing::info!(student_id = %student.id, "student registered");
        Ok(right(RegisterStudentResponse { student }))
    }
}
