//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific client facades, adding default
//! `tell` and `stop` methods built on top of a generic [`ActorHandle`].
use crate::{ActorHandle, ActorId, FrameworkError};

/// Trait for typed facades that wrap an [`ActorHandle`].
///
/// This trait reduces boilerplate by providing the plumbing every facade needs, so the
/// facade itself only contains the domain methods.
///
/// # Example
///
/// ```rust
/// use entity_actor::{ActorClient, ActorHandle, FrameworkError};
///
/// #[derive(Debug)]
/// enum CounterMessage { Add(u64) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error: {0}")]
/// struct CounterError(#[from] FrameworkError);
///
/// struct CounterClient { inner: ActorHandle<CounterMessage> }
///
/// impl ActorClient for CounterClient {
///     type Message = CounterMessage;
///     type Error = CounterError;
///
///     fn inner(&self) -> &ActorHandle<CounterMessage> { &self.inner }
/// }
///
/// fn usage(client: &CounterClient) -> Result<(), CounterError> {
///     client.tell(CounterMessage::Add(1))?;
///     client.stop()
/// }
/// ```
pub trait ActorClient: Send + Sync {
    /// Message type accepted by the wrapped actor.
    type Message: Send + 'static;

    /// The facade-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner handle.
    fn inner(&self) -> &ActorHandle<Self::Message>;

    fn id(&self) -> &ActorId {
        self.inner().id()
    }

    /// Fire-and-forget send.
    fn tell(&self, msg: Self::Message) -> Result<(), Self::Error> {
        tracing::debug!(actor = %self.id(), "Sending message");
        self.inner().tell(msg).map_err(Self::Error::from)
    }

    /// Request an orderly stop of the wrapped actor.
    fn stop(&self) -> Result<(), Self::Error> {
        tracing::debug!(actor = %self.id(), "Sending stop");
        self.inner().stop().map_err(Self::Error::from)
    }
}
