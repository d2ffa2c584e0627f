use entity_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentError {
    /// No comment with this id exists below the one that received the message.
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
