// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        either::{UseCaseResult, left, right},
        failures::{ForumFailure, ResourceKind},
    },
    domain::identity::{CommentId, StudentId},
};

pub struct DeleteCommentCommand {
    pub comment_id: CommentId,
    pub author_id: StudentId,
}

impl CommentCommandService {
    pub async fn delete(&self, command: DeleteCommentCommand) -> UseCaseResult<ForumFailure, ()> {
        let Some(comment) = self.comment_repo.find_by_id(command.comment_id).await? else {
            return Ok(left(ForumFailure::not_found(
                ResourceKind::Comment,
                command.comment_id,
            )));
        };

        if !comment.is_authored_by(command.author_id) {
            tracing::debug!(
                comment_id = %comment.id,
                actor = %command.author_id,
                "actor does not own comment"
            );
            return Ok(left(ForumFailure::not_allowed(
                ResourceKind::Comment,
                comment.id,
            )));
        }

        self.comment_repo.delete(&comment).await?;

        tracing::info!(comment_id = %comment.id, "comment deleted");
        Ok(right(()))
    }
}
