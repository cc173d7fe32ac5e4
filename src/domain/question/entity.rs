// src/domain/question/entity.rs
use crate::domain::attachment::{Attachment, AttachmentList, AttachmentParent};
use crate::domain::content::Content;
use crate::domain::errors::DomainResult;
use crate::domain::identity::{AnswerId, AttachmentId, QuestionId, StudentId};
use crate::domain::question::value_objects::QuestionTitle;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub author_id: StudentId,
    pub title: QuestionTitle,
    pub content: Content,
    pub slug: Slug,
    pub best_answer_id: Option<AnswerId>,
    pub attachments: AttachmentList,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub author_id: StudentId,
    pub title: QuestionTitle,
    pub content: Content,
    pub attachment_ids: Vec<AttachmentId>,
}

impl Question {
    /// Build a question, deriving its slug from the title. The slug stays
    /// fixed for the lifetime of the question.
    pub fn create(new: NewQuestion, now: DateTime<Utc>) -> DomainResult<Self> {
        let id = QuestionId::new();
        let slug = match Slug::from_text(new.title.as_str()) {
            Ok(slug) => slug,
            Err(_) => Slug::new(format!("question-{}", id.as_uuid().simple()))?,
        };

        let mut attachments = AttachmentList::default();
        attachments.update(Attachment::many_for(
            AttachmentParent::Question(id),
            &new.attachment_ids,
        ));

        Ok(Self {
            id,
            author_id: new.author_id,
            title: new.title,
            content: new.content,
            slug,
            best_answer_id: None,
            attachments,
            created_at: now,
            updated_at: None,
        })
    }

    pub fn is_authored_by(&self, student_id: StudentId) -> bool {
        self.author_id == student_id
    }

    pub fn set_content(&mut self, title: QuestionTitle, content: Content, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = Some(now);
    }

    pub fn set_best_answer(&mut self, answer_id: Option<AnswerId>, now: DateTime<Utc>) {
        self.best_answer_id = answer_id;
        self.updated_at = Some(now);
    }

    /// Swap in the persisted attachment set before reconciling an edit.
    pub fn load_attachments(&mut self, attachments: Vec<Attachment>) {
        self.attachments = AttachmentList::new(attachments);
    }

    pub fn replace_attachments(&mut self, ids: &[AttachmentId], now: DateTime<Utc>) {
        self.attachments
            .update(Attachment::many_for(AttachmentParent::Question(self.id), ids));
        self.updated_at = Some(now);
    }

    pub fn excerpt(&self) -> String {
        self.content.excerpt(120)
    }
}
