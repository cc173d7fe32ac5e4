// src/application/commands/students/service.rs
use std::sync::Arc;

use crate::application::ports::{ClockPort, EncrypterPort, HashComparerPort, HashGeneratorPort};
use crate::domain::student::StudentRepository;

pub struct StudentCommandService {
    pub(super) student_repo: Arc<dyn StudentRepository>,
    pub(super) hash_generator: Arc<HashGeneratorPort>,
    pub(super) hash_comparer: Arc<HashComparerPort>,
    pub(super) encrypter: Arc<EncrypterPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl StudentCommandService {
    pub fn new(
        student_repo: Arc<dyn StudentRepository>,
        hash_generator: Arc<HashGeneratorPort>,
        hash_comparer: Arc<HashComparerPort>,
        encrypter: Arc<EncrypterPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            student_repo,
            hash_generator,
            hash_comparer,
            encrypter,
            clock,
        }
    }
}
