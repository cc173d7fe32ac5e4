// tests/student_commands.rs
use std::sync::Arc;
use std::time::Duration;

mod support;

use forum_core::application::{
    ApplicationError,
    commands::students::{AuthenticateStudentCommand, RegisterStudentCommand},
    failures::{InvalidCredentials, StudentAlreadyExists},
    services::ForumServices,
};
use forum_core::config::PaginationConfig;
use forum_core::domain::{
    errors::DomainError,
    student::{Email, StudentRepository},
};
use forum_core::infrastructure::{
    cryptography::{Argon2Hasher, BiscuitEncrypter},
    time::SystemClock,
};
use support::{RacingStudentRepo, TestForum, in_memory_repos};

fn register(email: &str) -> RegisterStudentCommand {
    RegisterStudentCommand {
        name: "John Doe".into(),
        email: email.into(),
        password: "123456".into(),
    }
}

fn credentials(email: &str, password: &str) -> AuthenticateStudentCommand {
    AuthenticateStudentCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_stores_a_hashed_password() {
    let forum = TestForum::new();

    let response = forum
        .services
        .student_commands
        .register(register("johndoe@example.com"))
        .await
        .unwrap()
        .into_right()
        .unwrap();

    assert_eq!(response.student.name.as_str(), "John Doe");
    assert_eq!(response.student.password_hash.as_str(), "hashed:123456");

    let stored = forum
        .repos
        .students
        .find_by_email(&Email::new("johndoe@example.com").unwrap())
        .await
        .unwrap()
        .expect("student should be persisted");
    assert_eq!(stored.id, response.student.id);
}

#[tokio::test]
async fn register_twice_with_same_email_is_rejected() {
    let forum = TestForum::new();
    forum.register("John", "johndoe@example.com", "123456").await;

    let result = forum
        .services
        .student_commands
        .register(register("johndoe@example.com"))
        .await
        .unwrap();

    assert_eq!(
        result.into_left(),
        Some(StudentAlreadyExists {
            email: "johndoe@example.com".into()
        })
    );
}

#[tokio::test]
async fn register_conflict_on_insert_is_reported_as_duplicate() {
    let mut repos = in_memory_repos();
    repos.students = Arc::new(RacingStudentRepo);
    let forum = TestForum::with_repos(repos, PaginationConfig::default());

    let failure = forum
        .services
        .student_commands
        .register(register("race@example.com"))
        .await
        .unwrap()
        .into_left()
        .expect("conflict should be a business failure");

    assert_eq!(failure.email, "race@example.com");
}

#[tokio::test]
async fn register_with_malformed_email_is_a_validation_fault() {
    let forum = TestForum::new();

    let err = forum
        .services
        .student_commands
        .register(register("not-an-email"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn authenticate_returns_a_token() {
    let forum = TestForum::new();
    let student = forum.register("John", "johndoe@example.com", "123456").await;

    let response = forum
        .services
        .student_commands
        .authenticate(credentials("johndoe@example.com", "123456"))
        .await
        .unwrap()
        .into_right()
        .unwrap();

    assert!(!response.access_token.is_empty());
    let claims: serde_json::Value = serde_json::from_str(&response.access_token).unwrap();
    assert_eq!(claims["sub"], student.id.to_string());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let forum = TestForum::new();
    forum.register("John", "johndoe@example.com", "123456").await;
    let commands = &forum.services.student_commands;

    let wrong_password = commands
        .authenticate(credentials("johndoe@example.com", "654321"))
        .await
        .unwrap();
    let unknown_email = commands
        .authenticate(credentials("nobody@example.com", "123456"))
        .await
        .unwrap();
    let malformed_email = commands
        .authenticate(credentials("nobody", "123456"))
        .await
        .unwrap();

    assert_eq!(wrong_password.as_left(), Some(&InvalidCredentials));
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(unknown_email, malformed_email);
}

#[tokio::test]
async fn production_adapters_round_trip() {
    let repos = in_memory_repos();
    let hasher = Arc::new(Argon2Hasher);
    let encrypter = BiscuitEncrypter::new(&"11".repeat(32), Duration::from_secs(60)).unwrap();
    let services = ForumServices::new(
        &repos,
        hasher.clone(),
        hasher,
        Arc::new(encrypter),
        Arc::new(SystemClock),
        PaginationConfig::default(),
    );

    let student = services
        .student_commands
        .register(register("argon@example.com"))
        .await
        .unwrap()
        .into_right()
        .unwrap()
        .student;
    assert!(student.password_hash.as_str().starts_with("$argon2"));

    let ok = services
        .student_commands
        .authenticate(credentials("argon@example.com", "123456"))
        .await
        .unwrap();
    assert!(ok.is_right());

    let rejected = services
        .student_commands
        .authenticate(credentials("argon@example.com", "wrong"))
        .await
        .unwrap();
    assert_eq!(rejected.as_left(), Some(&InvalidCredentials));
}
