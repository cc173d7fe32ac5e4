// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            answers::AnswerCommandService, comments::CommentCommandService,
            questions::QuestionCommandService, students::StudentCommandService,
        },
        ports::{ClockPort, EncrypterPort, HashComparerPort, HashGeneratorPort},
        queries::{
            answers::AnswerQueryService, comments::CommentQueryService,
            questions::QuestionQueryService,
        },
    },
    config::PaginationConfig,
    domain::{
        answer::AnswerRepository, attachment::AttachmentRepository, comment::CommentRepository,
        question::QuestionRepository, student::StudentRepository,
    },
};

/// Storage adapters shared by every service.
#[derive(Clone)]
pub struct ForumRepositories {
    pub students: Arc<dyn StudentRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub attachments: Arc<dyn AttachmentRepository>,
}

pub struct ForumServices {
    pub student_commands: Arc<StudentCommandService>,
    pub question_commands: Arc<QuestionCommandService>,
    pub answer_commands: Arc<AnswerCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub question_queries: Arc<QuestionQueryService>,
    pub answer_queries: Arc<AnswerQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ForumServices {
    pub fn new(
        repos: &ForumRepositories,
        hash_generator: Arc<HashGeneratorPort>,
        hash_comparer: Arc<HashComparerPort>,
        encrypter: Arc<EncrypterPort>,
        clock: Arc<ClockPort>,
        pagination: PaginationConfig,
    ) -> Self {
        let student_commands = Arc::new(StudentCommandService::new(
            Arc::clone(&repos.students),
            hash_generator,
            hash_comparer,
            encrypter,
            Arc::clone(&clock),
        ));

        let question_commands = Arc::new(QuestionCommandService::new(
            Arc::clone(&repos.questions),
            Arc::clone(&repos.answers),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.attachments),
            Arc::clone(&clock),
        ));

        let answer_commands = Arc::new(AnswerCommandService::new(
            Arc::clone(&repos.answers),
            Arc::clone(&repos.questions),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.attachments),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.questions),
            Arc::clone(&repos.answers),
            clock,
        ));

        let question_queries = Arc::new(QuestionQueryService::new(
            Arc::clone(&repos.questions),
            pagination.questions_per_page,
        ));
        let answer_queries = Arc::new(AnswerQueryService::new(
            Arc::clone(&repos.answers),
            pagination.answers_per_page,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            pagination.comments_per_page,
        ));

        Self {
            student_commands,
            question_commands,
            answer_commands,
            comment_commands,
            question_queries,
            answer_queries,
            comment_queries,
        }
    }
}
