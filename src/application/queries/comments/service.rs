// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::domain::comment::CommentRepository;

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) per_page: u32,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>, per_page: u32) -> Self {
        Self {
            comment_repo,
            per_page,
        }
    }
}
