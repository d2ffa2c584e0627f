//! # Community Actor
//!
//! A community keeps its member list and owns every post made in it. Post ids are
//! `<community>_<n>`, which is what lets the engine route a post operation with nothing
//! but the post id.
//!
//! ## Posting
//!
//! On [`CommunityMessage::Post`] the community spawns the post actor, registers it and
//! then tells every current member about it. The notification is best-effort: a member
//! whose actor is gone is skipped, nobody acknowledges, nothing is retried.
//!
//! ## Listing
//!
//! [`CommunityMessage::GetPosts`] asks every post for its details concurrently, each with
//! the `post_details` budget, and answers with the ones that replied in time. The asks
//! run in a separate task so the community keeps serving its mailbox meanwhile.

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::Community;
pub use error::*;
pub use messages::*;

use entity_actor::ActorHandle;

pub type CommunityHandle = ActorHandle<CommunityMessage>;
