// src/application/failures.rs
//! Expected business failures. Each one is returned as `Either::Left`, never
//! raised as an error.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Question,
    Answer,
    Comment,
}

impl ResourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("student with email '{email}' already exists")]
pub struct StudentAlreadyExists {
    pub email: String,
}

/// Returned for an unknown e-mail and for a wrong password alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("credentials are not valid")]
pub struct InvalidCredentials;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} '{id}' not found")]
pub struct ResourceNotFound {
    pub resource: ResourceKind,
    pub id: String,
}

impl ResourceNotFound {
    pub fn new(resource: ResourceKind, id: impl ToString) -> Self {
        Self {
            resource,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not allowed to modify {resource} '{id}'")]
pub struct NotAllowed {
    pub resource: ResourceKind,
    pub id: String,
}

impl NotAllowed {
    pub fn new(resource: ResourceKind, id: impl ToString) -> Self {
        Self {
            resource,
            id: id.to_string(),
        }
    }
}

/// Discriminant the transport layer maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    StudentAlreadyExists,
    InvalidCredentials,
    ResourceNotFound,
    NotAllowed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForumFailure {
    #[error(transparent)]
    StudentAlreadyExists(#[from] StudentAlreadyExists),
    #[error(transparent)]
    InvalidCredentials(#[from] InvalidCredentials),
    #[error(transparent)]
    ResourceNotFound(#[from] ResourceNotFound),
    #[error(transparent)]
    NotAllowed(#[from] NotAllowed),
}

impl ForumFailure {
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::StudentAlreadyExists(_) => FailureKind::StudentAlreadyExists,
            Self::InvalidCredentials(_) => FailureKind::InvalidCredentials,
            Self::ResourceNotFound(_) => FailureKind::ResourceNotFound,
            Self::NotAllowed(_) => FailureKind::NotAllowed,
        }
    }

    pub fn not_found(resource: ResourceKind, id: impl ToString) -> Self {
        Self::ResourceNotFound(ResourceNotFound::new(resource, id))
    }

    pub fn not_allowed(resource: ResourceKind, id: impl ToString) -> Self {
        Self::NotAllowed(NotAllowed::new(resource, id))
    }
}

impl From<std::convert::Infallible> for ForumFailure {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}
