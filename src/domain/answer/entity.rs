// src/domain/answer/entity.rs
use crate::domain::attachment::{Attachment, AttachmentList, AttachmentParent};
use crate::domain::content::Content;
use crate::domain::identity::{AnswerId, AttachmentId, QuestionId, StudentId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub author_id: StudentId,
    pub question_id: QuestionId,
    pub content: Content,
    pub attachments: AttachmentList,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub author_id: StudentId,
    pub question_id: QuestionId,
    pub content: Content,
    pub attachment_ids: Vec<AttachmentId>,
}

impl Answer {
    pub fn create(new: NewAnswer, now: DateTime<Utc>) -> Self {
        let id = AnswerId::new();
        let mut attachments = AttachmentList::default();
        attachments.update(Attachment::many_for(
            AttachmentParent::Answer(id),
            &new.attachment_ids,
        ));

        Self {
            id,
            author_id: new.author_id,
            question_id: new.question_id,
            content: new.content,
            attachments,
            created_at: now,
            updated_at: None,
        }
    }

    pub fn is_authored_by(&self, student_id: StudentId) -> bool {
        self.author_id == student_id
    }

    pub fn set_content(&mut self, content: Content, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = Some(now);
    }

    pub fn load_attachments(&mut self, attachments: Vec<Attachment>) {
        self.attachments = AttachmentList::new(attachments);
    }

    pub fn replace_attachments(&mut self, ids: &[AttachmentId], now: DateTime<Utc>) {
        self.attachments
            .update(Attachment::many_for(AttachmentParent::Answer(self.id), ids));
        self.updated_at = Some(now);
    }
}
