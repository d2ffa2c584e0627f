//! # Comment Actor
//!
//! One actor per comment. A comment owns its direct replies, which are comment actors
//! themselves, so a thread is a tree of actors with ids that spell out the path from the
//! post: `go_1_2_1` is the first reply to the second comment on post `go_1`.
//!
//! ## Routing
//!
//! Every [`CommentMessage`] carries the id of the comment it is meant for. A comment
//! handles messages addressed to itself and hands the rest to the direct reply whose
//! subtree contains the target. Messages for ids that do not exist are dropped with a
//! diagnostic (asks are answered with `NotFound`).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](entity_actor::ActorEntity) implementation for [`Comment`]
//! - [`messages`] - [`CommentMessage`]
//! - [`error`] - [`CommentError`]

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::Comment;
pub use error::*;
pub use messages::*;

use entity_actor::ActorHandle;

pub type CommentHandle = ActorHandle<CommentMessage>;
