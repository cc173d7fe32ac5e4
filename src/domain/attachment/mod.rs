// src/domain/attachment/mod.rs
pub mod entity;
pub mod repository;

pub use crate::domain::identity::AttachmentId;
pub use entity::{Attachment, AttachmentList, AttachmentParent};
pub use repository::AttachmentRepository;
