//! Error types for the Engine actor.

use entity_actor::FrameworkError;
use thiserror::Error;

/// Reasons the engine refuses or drops a request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Username already exists")]
    UsernameTaken(String),

    /// A required request field was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Community {0} already exists")]
    CommunityExists(String),

    #[error("User {0} does not exist")]
    UnknownUser(String),

    #[error("Community {0} does not exist")]
    UnknownCommunity(String),

    /// Post ids have the form `<community>_<n>`.
    #[error("Malformed post id: {0}")]
    MalformedPostId(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Framework(#[from] FrameworkError),
}
