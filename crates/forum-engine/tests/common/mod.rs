#![allow(dead_code)]

use forum_engine::config::EngineConfig;
use forum_engine::lifecycle::ForumSystem;
use forum_engine::model::*;
use std::future::Future;
use std::time::Duration;

/// Polls `check` until it returns `Some` or two seconds pass.
///
/// Fire-and-forget traffic settles asynchronously, so assertions on its effects poll.
pub async fn eventually<T, F, Fut>(mut check: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        if let Some(value) = check().await {
            return Some(value);
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

/// A forum with the metrics ticker off, so counts only reflect test traffic.
pub fn quiet_forum() -> ForumSystem {
    ForumSystem::with_config(&EngineConfig {
        metrics_interval_ms: 0,
        ..EngineConfig::default()
    })
}

pub async fn register(system: &ForumSystem, username: &str) -> RegistrationResponse {
    system
        .engine
        .register_user(RegisterUser {
            username: username.into(),
            password: format!("{username}-pw"),
        })
        .await
        .unwrap()
}

pub fn join(system: &ForumSystem, username: &str, community: &str) {
    system
        .engine
        .join_community(JoinCommunity {
            username: username.into(),
            community: community.into(),
        })
        .unwrap();
}

pub fn post(system: &ForumSystem, community: &str, author: &str, content: &str) {
    system
        .engine
        .post_to_community(PostToCommunity {
            community: community.into(),
            author: author.into(),
            content: content.into(),
        })
        .unwrap();
}

pub fn comment(system: &ForumSystem, post_id: &str, author: &str, content: &str) {
    system
        .engine
        .comment_on_post(CommentOnPost {
            post_id: post_id.into(),
            author: author.into(),
            content: content.into(),
        })
        .unwrap();
}

pub fn vote(system: &ForumSystem, post_id: &str, voter: &str, upvote: bool) {
    system
        .engine
        .vote_on_post(VoteOnPost {
            post_id: post_id.into(),
            voter: voter.into(),
            upvote,
        })
        .unwrap();
}
