//! # Forum Engine Demo
//!
//! Runs a short scenario against a local forum and shuts it down:
//! 1.  Setting up the [`ForumSystem`] (config from the file named by `FORUM_CONFIG`, if set).
//! 2.  Registering `alice` and `bob`, creating the `rust` community.
//! 3.  Posting, commenting, replying and voting.
//! 4.  Reading feeds, inboxes and profiles.
//!
//! Run with `RUST_LOG=info` to follow the actors.

use entity_actor::tracing::setup_tracing;
use forum_engine::config::EngineConfig;
use forum_engine::lifecycle::ForumSystem;
use forum_engine::model::*;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = match std::env::var("FORUM_CONFIG") {
        Ok(path) => EngineConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => EngineConfig::default(),
    };
    info!(?config, "Starting forum");

    let system = ForumSystem::with_config(&config);
    let engine = &system.engine;

    let span = tracing::info_span!("registration");
    async {
        for (username, password) in [("alice", "pw-a"), ("bob", "pw-b"), ("alice", "again")] {
            let response = engine
                .register_user(RegisterUser {
                    username: username.into(),
                    password: password.into(),
                })
                .await
                .map_err(|e| e.to_string())?;
            info!(username, success = response.success, message = %response.message, "Registration");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("posting");
    async {
        engine.create_community(CreateCommunity { name: "rust".into() })?;
        for username in ["alice", "bob"] {
            engine.join_community(JoinCommunity {
                username: username.into(),
                community: "rust".into(),
            })?;
        }
        engine.post_to_community(PostToCommunity {
            community: "rust".into(),
            author: "alice".into(),
            content: "Ownership finally clicked".into(),
        })?;
        engine.comment_on_post(CommentOnPost {
            post_id: "rust_1".into(),
            author: "bob".into(),
            content: "Welcome to the club".into(),
        })?;
        engine.reply_to_comment(CommentOnComment {
            post_id: "rust_1".into(),
            parent_comment_id: "rust_1_1".into(),
            author: "alice".into(),
            content: "Thanks!".into(),
        })?;
        engine.vote_on_post(VoteOnPost {
            post_id: "rust_1".into(),
            voter: "bob".into(),
            upvote: true,
        })?;
        engine.send_direct_message(SendDirectMessage {
            from: "bob".into(),
            to: "alice".into(),
            content: "Nice post".into(),
        })
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    // Give the fire-and-forget traffic a moment to settle
    tokio::time::sleep(Duration::from_millis(100)).await;

    let span = tracing::info_span!("reading");
    async {
        let feed = engine.get_feed("bob").await;
        for post in &feed.posts {
            info!(post_id = %post.post_id, author = %post.author, upvotes = post.upvotes, comments = post.comment_ids.len(), "Feed entry");
        }

        match engine.get_comment("rust_1", "rust_1_1").await {
            Some(comment) => info!(comment_id = %comment.comment_id, replies = ?comment.replies, "Comment thread"),
            None => warn!("Comment rust_1_1 not found"),
        }

        let inbox = engine.get_inbox("alice").await;
        info!(messages = inbox.messages.len(), "Alice's inbox");

        if let Some(profile) = engine.get_user_profile("alice").await {
            info!(karma = profile.karma, subscriptions = ?profile.subscriptions, "Alice's profile");
        }
    }
    .instrument(span)
    .await;

    match engine.metrics().await {
        Ok(metrics) => info!(?metrics, "Engine metrics"),
        Err(e) => warn!(error = %e, "Metrics unavailable"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
