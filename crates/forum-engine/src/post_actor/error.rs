use entity_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostError {
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
