//! # Engine Actor
//!
//! The root of the actor tree. The engine owns every user and community actor, keeps
//! them by name, and is the only actor outside code talks to (through
//! [`EngineClient`](crate::clients::EngineClient)).
//!
//! ## Responsibilities
//!
//! - **Registry**: usernames and community names are unique; duplicates are refused
//!   without touching existing state.
//! - **Router**: membership, posting and direct messages go to the named actor; post and
//!   comment operations go to the community named by the post id prefix.
//! - **Reads**: inbox and feed are fetched from the user with a bounded ask; an unknown
//!   user, a timeout or a dead user all give an empty answer.
//! - **Metrics**: every message is counted, and a ticker makes the engine log the
//!   totals periodically.
//!
//! Requests that cannot be routed (unknown names, malformed ids, empty fields) are
//! dropped; the run loop logs the [`EngineError`] describing why.

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::{community_of, Engine};
pub use error::*;
pub use messages::*;

use crate::clients::EngineClient;
use crate::config::EngineConfig;
use entity_actor::{ActorHandle, EntityActor};

pub type EngineHandle = ActorHandle<EngineMessage>;

/// Creates the Engine actor, hosted at `config.node`, and its client.
pub fn new(config: &EngineConfig) -> (EntityActor<Engine>, EngineClient) {
    let (actor, handle) = EntityActor::new(Engine::new(config), &config.node);
    let client = EngineClient::new(handle, config.timeouts());

    (actor, client)
}
