use entity_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommunityError {
    #[error("Post not found: {0}")]
    UnknownPost(String),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
