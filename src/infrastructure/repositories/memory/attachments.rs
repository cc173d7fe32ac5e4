// src/infrastructure/repositories/memory/attachments.rs
use super::lock;
use crate::domain::{
    attachment::{Attachment, AttachmentParent, AttachmentRepository},
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Links between uploaded files and the question or answer they belong to.
#[derive(Default)]
pub struct InMemoryAttachmentRepository {
    rows: Mutex<Vec<Attachment>>,
}

impl InMemoryAttachmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttachmentRepository for InMemoryAttachmentRepository {
    async fn find_many_by_parent(&self, parent: AttachmentParent) -> DomainResult<Vec<Attachment>> {
        let rows = lock(&self.rows)?;
        Ok(rows.iter().filter(|a| a.parent() == parent).cloned().collect())
    }

    /// An upload belongs to one parent for its whole life: linking it to a
    /// second parent is a conflict and nothing from the batch is stored.
    async fn create_many(&self, attachments: &[Attachment]) -> DomainResult<()> {
        let mut rows = lock(&self.rows)?;
        for attachment in attachments {
            if let Some(existing) = rows
                .iter()
                .find(|a| a.id() == attachment.id() && a.parent() != attachment.parent())
            {
                return Err(DomainError::conflict(format!(
                    "attachment '{}' is already linked to {}",
                    existing.id(),
                    existing.parent()
                )));
            }
        }
        for attachment in attachments {
            if !rows.contains(attachment) {
                rows.push(attachment.clone());
            }
        }
        Ok(())
    }

    async fn delete_many(&self, attachments: &[Attachment]) -> DomainResult<()> {
        lock(&self.rows)?.retain(|a| !attachments.contains(a));
        Ok(())
    }

    async fn delete_many_by_parent(&self, parent: AttachmentParent) -> DomainResult<()> {
        lock(&self.rows)?.retain(|a| a.parent() != parent);
        Ok(())
    }
}
