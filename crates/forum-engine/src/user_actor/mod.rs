//! # User Actor
//!
//! This module implements the per-user actor: karma, direct-message inbox and community
//! subscriptions.
//!
//! ## Overview
//!
//! A user never fails a message: every handler is infallible, and reads that depend on
//! other actors degrade instead of erroring. The feed is the interesting one: the user
//! asks each subscribed community for its posts at the same time, each with its own
//! timeout, and answers with whatever came back (a community that is slow or gone just
//! contributes nothing).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](entity_actor::ActorEntity) implementation for [`UserAccount`]
//! - [`messages`] - [`UserMessage`]
//!
//! ## Usage
//!
//! ```rust
//! use forum_engine::config::Timeouts;
//! use forum_engine::user_actor::{UserAccount, UserMessage};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let user = entity_actor::spawn(UserAccount::new("alice", "secret", Timeouts::default()), "local");
//!
//!     user.tell(UserMessage::UpdateKarma { delta: 3 }).unwrap();
//!     let profile = user
//!         .ask(|respond_to| UserMessage::GetProfile { respond_to }, Duration::from_secs(1))
//!         .await
//!         .unwrap();
//!     assert_eq!(profile.karma, 3);
//! }
//! ```

pub mod entity;
pub mod messages;

pub use entity::UserAccount;
pub use messages::*;

use entity_actor::ActorHandle;

pub type UserHandle = ActorHandle<UserMessage>;
