//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Every failure a caller can observe when talking to an actor (closed mailbox,
//! dropped reply, expired ask) is one of these variants, so fan-out code can
//! collapse them uniformly.

use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Ask timed out after {0:?}")]
    Timeout(Duration),
    #[error("Item not found: {0}")]
    NotFound(String),
}
