// src/infrastructure/repositories/memory/mod.rs
//! Process-local adapters for every repository port.
//!
//! Rows are kept in insertion order; listings are sorted newest first by
//! `created_at`, with later insertions winning ties.

mod answers;
mod attachments;
mod comments;
mod questions;
mod students;

pub use answers::InMemoryAnswerRepository;
pub use attachments::InMemoryAttachmentRepository;
pub use comments::InMemoryCommentRepository;
pub use questions::InMemoryQuestionRepository;
pub use students::InMemoryStudentRepository;

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard};

pub(crate) fn lock<T>(rows: &Mutex<T>) -> DomainResult<MutexGuard<'_, T>> {
    rows.lock()
        .map_err(|_| DomainError::persistence("in-memory store lock poisoned"))
}

pub(crate) fn newest_first<'a, T, I, F>(rows: I, created_at: F) -> Vec<T>
where
    T: Clone + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut sorted: Vec<T> = rows.rev().cloned().collect();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted
}
