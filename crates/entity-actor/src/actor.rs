//! # Generic Actor Server
//!
//! This module defines the `EntityActor`, the component that drives one entity's
//! lifecycle. It implements the "Server" side of the Actor Model: it owns the entity and
//! the receiving end of the mailbox, and processes messages sequentially.

use crate::client::{ActorHandle, ActorId};
use crate::entity::ActorEntity;
use crate::message::Envelope;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// The generic actor that runs a single entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`entity`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Even though we might have 100 000 `EntityActor` instances running (one per comment),
/// each one processes its own messages *sequentially* in a loop. This means we don't need
/// `Mutex` or `RwLock` for any entity state. The Actor Model gives us safety through
/// exclusive ownership of state within the task.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `EntityActor::new()` to get the `actor` (server) and `handle` (client).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Talk**: Clone the handle wherever the actor must be reachable.
///
/// Children are normally started through [`ActorContext::spawn`] instead, which places them
/// on the parent's node.
pub struct EntityActor<T: ActorEntity> {
    entity: T,
    receiver: mpsc::UnboundedReceiver<Envelope<T::Message>>,
    myself: ActorHandle<T::Message>,
}

impl<T: ActorEntity> EntityActor<T> {
    /// Creates a new `EntityActor` hosted at `address`, and its associated handle.
    ///
    /// The mailbox exists as soon as this returns, so messages sent through the handle
    /// before `run()` starts are queued, not lost.
    pub fn new(entity: T, address: &str) -> (Self, ActorHandle<T::Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = ActorHandle::new(ActorId::new(address), sender);
        let actor = Self {
            entity,
            receiver,
            myself: handle.clone(),
        };
        (actor, handle)
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> ActorContext<T> {
        ActorContext {
            myself: self.myself.clone(),
        }
    }

    /// Runs the actor's event loop until it is stopped or every handle is dropped.
    pub async fn run(self) {
        let Self {
            mut entity,
            mut receiver,
            myself,
        } = self;
        // Extract just the type name (e.g., "Community" instead of "forum_engine::community_actor::entity::Community")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let ctx = ActorContext { myself };
        let actor = ctx.myself.id().to_string();
        debug!(entity_type, %actor, "Actor started");

        if let Err(e) = entity.on_start(&ctx).await {
            warn!(entity_type, %actor, error = %e, "on_start failed");
        }

        while let Some(envelope) = receiver.recv().await {
            match envelope {
                Envelope::Message(msg) => {
                    debug!(entity_type, %actor, ?msg, "Message");
                    if let Err(e) = entity.handle(msg, &ctx).await {
                        warn!(entity_type, %actor, error = %e, "Message dropped");
                    }
                }
                Envelope::Stop => {
                    entity.on_stop(&ctx).await;
                    break;
                }
            }
        }

        debug!(entity_type, %actor, "Shutdown");
    }
}

/// Per-actor runtime context, handed to every hook.
pub struct ActorContext<T: ActorEntity> {
    myself: ActorHandle<T::Message>,
}

impl<T: ActorEntity> ActorContext<T> {
    /// Handle to the actor currently running this hook.
    pub fn myself(&self) -> &ActorHandle<T::Message> {
        &self.myself
    }

    /// Starts `child` as a new actor on this actor's node and returns its handle.
    pub fn spawn<C: ActorEntity>(&self, child: C) -> ActorHandle<C::Message> {
        spawn(child, self.myself.id().address())
    }
}

/// Starts `entity` as a detached actor hosted at `address`.
pub fn spawn<T: ActorEntity>(entity: T, address: &str) -> ActorHandle<T::Message> {
    let (actor, handle) = EntityActor::new(entity, address);
    tokio::spawn(actor.run());
    handle
}
