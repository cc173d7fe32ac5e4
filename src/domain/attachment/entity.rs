// src/domain/attachment/entity.rs
use crate::domain::identity::{AnswerId, AttachmentId, QuestionId};
use crate::domain::watched_list::WatchedList;
use std::fmt;

/// The aggregate an attachment belongs to. Exactly one, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentParent {
    Question(QuestionId),
    Answer(AnswerId),
}

impl fmt::Display for AttachmentParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question:{id}"),
            Self::Answer(id) => write!(f, "answer:{id}"),
        }
    }
}

/// Link between an uploaded file and the question or answer it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    id: AttachmentId,
    parent: AttachmentParent,
}

impl Attachment {
    pub const fn new(id: AttachmentId, parent: AttachmentParent) -> Self {
        Self { id, parent }
    }

    pub fn many_for(parent: AttachmentParent, ids: &[AttachmentId]) -> Vec<Self> {
        ids.iter().map(|id| Self::new(*id, parent)).collect()
    }

    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    pub const fn parent(&self) -> AttachmentParent {
        self.parent
    }
}

pub type AttachmentList = WatchedList<Attachment>;

impl WatchedList<Attachment> {
    pub fn attachment_ids(&self) -> Vec<AttachmentId> {
        self.current_items().iter().map(Attachment::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_for_links_every_id_to_the_parent() {
        let parent = AttachmentParent::Question(QuestionId::new());
        let ids = [AttachmentId::new(), AttachmentId::new()];

        let attachments = Attachment::many_for(parent, &ids);

        assert_eq!(attachments.len(), 2);
        assert!(attachments.iter().all(|a| a.parent() == parent));
        assert_eq!(attachments[1].id(), ids[1]);
    }

    #[test]
    fn list_reconciles_by_attachment() {
        let parent = AttachmentParent::Answer(AnswerId::new());
        let (a, b, c) = (AttachmentId::new(), AttachmentId::new(), AttachmentId::new());
        let mut list = AttachmentList::new(Attachment::many_for(parent, &[a, b]));

        list.update(Attachment::many_for(parent, &[b, c]));

        assert_eq!(list.attachment_ids(), vec![b, c]);
        assert_eq!(list.new_items(), &[Attachment::new(c, parent)]);
        assert_eq!(list.removed_items(), &[Attachment::new(a, parent)]);
    }
}
