// src/domain/attachment/repository.rs
use crate::domain::attachment::entity::{Attachment, AttachmentParent};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn find_many_by_parent(&self, parent: AttachmentParent) -> DomainResult<Vec<Attachment>>;
    async fn create_many(&self, attachments: &[Attachment]) -> DomainResult<()>;
    async fn delete_many(&self, attachments: &[Attachment]) -> DomainResult<()>;
    async fn delete_many_by_parent(&self, parent: AttachmentParent) -> DomainResult<()>;
}
