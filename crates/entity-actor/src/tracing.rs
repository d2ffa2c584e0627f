//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle** (debug): `Actor started` / `Shutdown`, tagged with `entity_type`
//!   and the actor id (`address/seq`)
//! - **Every message** (debug): the full message payload via its `Debug` representation
//! - **Dropped messages** (warn): handler errors such as unknown targets, with the reason
//! - **Domain events** (info): whatever the entity handlers choose to report
//!
//! ## Usage Examples
//!
//! ```bash
//! # Domain events only
//! RUST_LOG=info cargo run
//!
//! # Every message flowing through every mailbox
//! RUST_LOG=debug cargo run
//!
//! # Only the runtime crate
//! RUST_LOG=entity_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a post being voted on looks like:
//!
//! ```text
//! DEBUG Message entity_type="Engine" actor="local/1" msg=VoteOnPost(VoteOnPost { post_id: "go_1", voter: "bob", upvote: true })
//! DEBUG Message entity_type="Community" actor="local/3" msg=ForPost { post_id: "go_1", msg: Vote { voter: "bob", upvote: true } }
//! DEBUG Message entity_type="Post" actor="local/5" msg=Vote { voter: "bob", upvote: true }
//! INFO Vote recorded post_id="go_1" voter="bob" upvote=true
//! DEBUG Message entity_type="Engine" actor="local/1" msg=UpdateKarma { username: "alice", delta: 1 }
//! ```

/// Initializes the global subscriber: `RUST_LOG` filtering, compact output, no module
/// targets (the `entity_type` field already says where a line comes from).
///
/// Calling it twice panics, as with any global subscriber; tests should not call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
