// tests/support/builders.rs
use std::sync::Arc;

use forum_core::{
    application::{
        commands::{
            answers::AnswerQuestionCommand, questions::CreateQuestionCommand,
            students::RegisterStudentCommand,
        },
        services::{ForumRepositories, ForumServices},
    },
    config::PaginationConfig,
    domain::{
        answer::Answer,
        identity::{AttachmentId, QuestionId, StudentId},
        question::Question,
        student::Student,
    },
    infrastructure::repositories::{
        InMemoryAnswerRepository, InMemoryAttachmentRepository, InMemoryCommentRepository,
        InMemoryQuestionRepository, InMemoryStudentRepository,
    },
};

use super::mocks::{FakeEncrypter, FakeHasher, SteppingClock};

/// Services wired to fresh in-memory storage, fake crypto and a stepping clock.
pub struct TestForum {
    pub services: ForumServices,
    pub repos: ForumRepositories,
}

pub fn in_memory_repos() -> ForumRepositories {
    ForumRepositories {
        students: Arc::new(InMemoryStudentRepository::new()),
        questions: Arc::new(InMemoryQuestionRepository::new()),
        answers: Arc::new(InMemoryAnswerRepository::new()),
        comments: Arc::new(InMemoryCommentRepository::new()),
        attachments: Arc::new(InMemoryAttachmentRepository::new()),
    }
}

impl TestForum {
    pub fn new() -> Self {
        Self::with_pagination(PaginationConfig::default())
    }

    pub fn with_pagination(pagination: PaginationConfig) -> Self {
        Self::with_repos(in_memory_repos(), pagination)
    }

    pub fn with_repos(repos: ForumRepositories, pagination: PaginationConfig) -> Self {
        let hasher = Arc::new(FakeHasher);
        let services = ForumServices::new(
            &repos,
            hasher.clone(),
            hasher,
            Arc::new(FakeEncrypter),
            Arc::new(SteppingClock::new()),
            pagination,
        );
        Self { services, repos }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Student {
        self.services
            .student_commands
            .register(RegisterStudentCommand {
                name: name.into(),
                email: email.into(),
                password: password.into(),
            })
            .await
            .expect("register failed")
            .into_right()
            .expect("register returned a business failure")
            .student
    }

    pub async fn ask(&self, author_id: StudentId, title: &str) -> Question {
        self.ask_with_attachments(author_id, title, vec![]).await
    }

    pub async fn ask_with_attachments(
        &self,
        author_id: StudentId,
        title: &str,
        attachment_ids: Vec<AttachmentId>,
    ) -> Question {
        self.services
            .question_commands
            .create(CreateQuestionCommand {
                author_id,
                title: title.into(),
                content: format!("Content of {title}"),
                attachment_ids,
            })
            .await
            .expect("create question failed")
            .into_right()
            .expect("create question is infallible")
            .question
    }

    pub async fn answer(&self, author_id: StudentId, question_id: QuestionId, content: &str) -> Answer {
        self.answer_with_attachments(author_id, question_id, content, vec![])
            .await
    }

    pub async fn answer_with_attachments(
        &self,
        author_id: StudentId,
        question_id: QuestionId,
        content: &str,
        attachment_ids: Vec<AttachmentId>,
    ) -> Answer {
        self.services
            .answer_commands
            .answer(AnswerQuestionCommand {
                author_id,
                question_id,
                content: content.into(),
                attachment_ids,
            })
            .await
            .expect("answer question failed")
            .into_right()
            .expect("answer question returned a business failure")
            .answer
    }
}
