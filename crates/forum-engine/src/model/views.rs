//! Answers and notifications produced by the actors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
}

impl RegistrationResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Registration successful".to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// One inbox entry, stamped by the recipient when it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub from: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// A user's inbox, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    pub messages: Vec<DirectMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub posts: Vec<PostView>,
}

/// Snapshot of a post as answered by `GetPostDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub post_id: String,
    pub community: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u64,
    pub downvotes: u64,
    /// Top-level comments in creation order.
    pub comment_ids: Vec<String>,
}

/// Snapshot of one comment. `replies` lists direct replies only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub comment_id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub replies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub karma: i64,
    /// Subscribed community names, sorted.
    pub subscriptions: Vec<String>,
    pub inbox_size: usize,
}

/// Sent by a community to each member when a post is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPostNotification {
    pub community: String,
    pub post_id: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetrics {
    pub total_messages: u64,
    pub users: usize,
    pub communities: usize,
}
