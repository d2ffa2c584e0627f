//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stateful entity (a user, a
//! community, a post, ...) must implement to be driven by the generic [`EntityActor`](crate::EntityActor).
//! One value of the implementing type is one actor: it owns its state exclusively, and the
//! framework feeds it messages from its private mailbox one at a time.
//!
//! # Architecture Note
//! By defining a contract that all entity types must satisfy, we write the mailbox loop,
//! the logging, and the shutdown handling *once* and reuse them everywhere.
//!
//! We use associated types (`Message`, `Error`) to enforce type safety. A community
//! actor only accepts `CommunityMessage`s, and you can't accidentally send it a
//! `PostMessage`. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_start`]
//! - [`ActorEntity::on_stop`]
//!
//! You do **not** need to implement these methods unless you want to customize behavior.

use crate::actor::ActorContext;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any entity must implement to be run as an actor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await. Every hook receives an
/// [`ActorContext`], which gives access to the actor's own handle and lets it spawn
/// children on the same node.
#[async_trait]
pub trait ActorEntity: Send + Sized + 'static {
    /// The message enum accepted by this actor's mailbox.
    type Message: Send + Debug + 'static;

    /// The error type for this entity.
    ///
    /// # Design Note: Errors are diagnostics
    ///
    /// A handler error never stops the actor. The run loop logs it at `warn` and moves on
    /// to the next message. Use it for "parent not found" style drops; reply to asks
    /// explicitly through their `respond_to` channel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once, before the first message is processed.
    async fn on_start(&mut self, _ctx: &ActorContext<Self>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one message. Never runs concurrently with another call on the same entity.
    async fn handle(
        &mut self,
        msg: Self::Message,
        ctx: &ActorContext<Self>,
    ) -> Result<(), Self::Error>;

    /// Called when the actor receives a stop request, before the loop exits.
    /// Owners use it to stop the children they spawned.
    async fn on_stop(&mut self, _ctx: &ActorContext<Self>) {}
}
