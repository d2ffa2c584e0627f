//! # Entity Actor
//!
//! This crate provides the building blocks for systems where **every entity is its own
//! actor**: one Tokio task, one private mailbox, one piece of state that nothing else
//! can touch. Entities talk to each other only through messages.
//!
//! ## Why one actor per entity?
//!
//! - Isolated state (no shared memory, no locks)
//! - Sequential processing within each actor eliminates race conditions on its state
//! - Independent entities run in parallel across the runtime's worker threads
//! - Owners spawn children on demand and hold the only owning reference to them
//!
//! ## Two message disciplines
//!
//! - **Tell** ([`ActorHandle::tell`]): fire-and-forget, at-most-once. Two messages from
//!   the same sender to the same actor arrive in send order; nothing else is promised.
//! - **Ask** ([`ActorHandle::ask`]): a request carrying a one-shot [`Response`] channel,
//!   bounded by a timeout. Timeouts, dropped replies and error replies are all `Err`, so
//!   the caller can fall back uniformly. [`fan_out`] issues many asks at once and keeps
//!   whatever succeeded.
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_actor::{ActorContext, ActorEntity, EntityActor, Response};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//! use std::time::Duration;
//!
//! // 1. Define the Entity and its messages
//! struct Counter { total: u64 }
//!
//! #[derive(Debug)]
//! enum CounterMessage {
//!     Add(u64),
//!     Get { respond_to: Response<u64> },
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Message = CounterMessage;
//!     type Error = Infallible;
//!
//!     async fn handle(&mut self, msg: CounterMessage, _ctx: &ActorContext<Self>) -> Result<(), Infallible> {
//!         match msg {
//!             CounterMessage::Add(n) => self.total += n,
//!             CounterMessage::Get { respond_to } => { let _ = respond_to.send(Ok(self.total)); }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, counter) = EntityActor::new(Counter { total: 0 }, "local");
//!     let task = tokio::spawn(actor.run());
//!
//!     counter.tell(CounterMessage::Add(2)).unwrap();
//!     counter.tell(CounterMessage::Add(3)).unwrap();
//!     let total = counter
//!         .ask(|respond_to| CounterMessage::Get { respond_to }, Duration::from_secs(1))
//!         .await
//!         .unwrap();
//!     assert_eq!(total, 5);
//!
//!     counter.stop().unwrap();
//!     task.await.unwrap();
//! }
//! ```
//!
//! ## Addressing
//!
//! Every handle carries an [`ActorId`]: the address of the node hosting the actor plus a
//! process-unique sequence number. Children spawned through [`ActorContext::spawn`]
//! inherit their parent's address.
//!
//! ## Shutdown
//!
//! Parents and children usually reference each other (a post knows the engine, the engine
//! owns the post's community), so dropping handles is not enough to end the tree. Stopping
//! is explicit: [`ActorHandle::stop`] enqueues a stop request behind pending messages, and
//! the entity's [`ActorEntity::on_stop`] hook forwards it to the children it owns
//! (see [`ChildRegistry::stop_all`]).
//!
//! ## Testing
//!
//! See the [`mock`] module for mock handles and scripted mock actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod registry;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{spawn, ActorContext, EntityActor};
pub use client::{fan_out, ActorHandle, ActorId};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Envelope, Response};
pub use registry::ChildRegistry;
