//! # Post Actor
//!
//! One actor per post, spawned and owned by its community. A post tallies its votes,
//! reports karma changes for its author to the engine, and owns the top-level comments
//! made on it (ids `<post-id>_<n>`).
//!
//! Messages for comments arrive wrapped in [`PostMessage::ForComment`] and are handed to
//! the top-level comment whose thread contains the target id.

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::Post;
pub use error::*;
pub use messages::*;

use entity_actor::ActorHandle;

pub type PostHandle = ActorHandle<PostMessage>;
