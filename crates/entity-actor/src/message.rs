//! # Generic Messages
//!
//! This module defines what travels through an actor's mailbox.
//!
//! Domain actors define their own message enums. The framework wraps each one in an
//! [`Envelope`] so that lifecycle control (stopping) shares the same FIFO queue as
//! ordinary traffic: a `Stop` is processed only after everything sent before it.

use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by asks.
///
/// A request message that expects an answer carries one of these in a
/// `respond_to` field. The handler either sends exactly one value or drops it;
/// both outcomes are observed by the asking side.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal mailbox item.
#[derive(Debug)]
pub enum Envelope<M> {
    /// A domain message for the entity's handler.
    Message(M),
    /// Run the `on_stop` hook and leave the event loop.
    Stop,
}
