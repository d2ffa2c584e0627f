//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the forum: starting the root actor,
//! handing out its client, and tearing the whole tree down again.
//!
//! ## The Orchestration Pattern
//!
//! Only the engine is started from outside. Everything else is spawned on demand by its
//! owner (users and communities by the engine, posts by communities, comments by posts
//! and by other comments), so wiring is a single step:
//!
//! ```rust,ignore
//! impl ForumSystem {
//!     pub fn with_config(config: &EngineConfig) -> Self {
//!         let (actor, engine) = engine::new(config);
//!         let handle = tokio::spawn(actor.run());
//!         Self { engine, handle }
//!     }
//! }
//! ```
//!
//! ## Dependencies Without Late Binding
//!
//! Owners pass collaborators to children when they build them: a community gets the
//! engine's handle so its posts can report karma, a post gets it from the community.
//! Handles are plain cloneable values, so nothing has to be injected after start-up.
//!
//! ## Graceful Shutdown
//!
//! The tree is cyclic (posts hold the engine's handle, the engine owns the posts'
//! communities), so dropping clients never closes every mailbox. Shutdown is explicit:
//!
//! 1. **Stop the engine** - queued behind whatever the engine has not processed yet
//! 2. **Cascade** - the engine stops users and communities, communities stop posts,
//!    posts stop comments, comments stop replies
//! 3. **Await** - [`ForumSystem::shutdown`] returns once the engine's loop has exited
//!
//! Descendants finish their own queued messages after the engine is gone; anything they
//! send upward is dropped.
//!
//! ## Observability & Tracing
//!
//! Call [`entity_actor::tracing::setup_tracing`] once at process start.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Domain events
//! RUST_LOG=debug cargo run     # Every message
//! ```

pub mod forum_system;

pub use forum_system::*;
