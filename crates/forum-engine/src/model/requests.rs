//! Requests accepted by the engine.
//!
//! Each request can report the first required field that is empty, see
//! [`Validate::missing_field`]. Vote and reply targets are not checked here; unknown
//! ids are a routing concern.

use serde::{Deserialize, Serialize};

/// Required-field check shared by every request.
pub trait Validate {
    /// Name of the first required field left empty, if any.
    fn missing_field(&self) -> Option<&'static str>;
}

fn first_empty(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCommunity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinCommunity {
    pub username: String,
    pub community: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveCommunity {
    pub username: String,
    pub community: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostToCommunity {
    pub community: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentOnPost {
    pub post_id: String,
    pub author: String,
    pub content: String,
}

/// A reply to an existing comment, at any depth below `post_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentOnComment {
    pub post_id: String,
    pub parent_comment_id: String,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOnPost {
    pub post_id: String,
    pub voter: String,
    pub upvote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOnComment {
    pub post_id: String,
    pub comment_id: String,
    pub voter: String,
    pub upvote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendDirectMessage {
    pub from: String,
    pub to: String,
    pub content: String,
}

impl Validate for RegisterUser {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("username", self.username.as_str()), ("password", self.password.as_str())])
    }
}

impl Validate for CreateCommunity {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("name", self.name.as_str())])
    }
}

impl Validate for JoinCommunity {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("username", self.username.as_str()), ("community", self.community.as_str())])
    }
}

impl Validate for LeaveCommunity {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("username", self.username.as_str()), ("community", self.community.as_str())])
    }
}

impl Validate for PostToCommunity {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[
            ("community", self.community.as_str()),
            ("author", self.author.as_str()),
            ("content", self.content.as_str()),
        ])
    }
}

impl Validate for CommentOnPost {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[
            ("post_id", self.post_id.as_str()),
            ("author", self.author.as_str()),
            ("content", self.content.as_str()),
        ])
    }
}

impl Validate for CommentOnComment {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[
            ("post_id", self.post_id.as_str()),
            ("parent_comment_id", self.parent_comment_id.as_str()),
            ("author", self.author.as_str()),
            ("content", self.content.as_str()),
        ])
    }
}

impl Validate for VoteOnPost {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("post_id", self.post_id.as_str()), ("voter", self.voter.as_str())])
    }
}

impl Validate for VoteOnComment {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[
            ("post_id", self.post_id.as_str()),
            ("comment_id", self.comment_id.as_str()),
            ("voter", self.voter.as_str()),
        ])
    }
}

impl Validate for SendDirectMessage {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("from", self.from.as_str()), ("to", self.to.as_str()), ("content", self.content.as_str())])
    }
}
