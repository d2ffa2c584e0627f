//! # Engine Client
//!
//! Provides a high‑level API for interacting with the `Engine` actor.
//! Commands are fire-and-forget and only fail when the engine has shut down. Reads are
//! bounded asks that degrade to an empty answer (`Vec::new()`, `None`, an empty inbox)
//! instead of failing.
use crate::config::{Timeouts, REPLY_GRACE};
use crate::engine::{EngineError, EngineHandle, EngineMessage};
use crate::model::*;
use entity_actor::ActorClient;
use tracing::{debug, instrument};

/// Client for interacting with the Engine actor.
#[derive(Clone)]
pub struct EngineClient {
    inner: EngineHandle,
    timeouts: Timeouts,
}

impl EngineClient {
    pub fn new(inner: EngineHandle, timeouts: Timeouts) -> Self {
        Self { inner, timeouts }
    }
}

impl ActorClient for EngineClient {
    type Message = EngineMessage;
    type Error = EngineError;

    fn inner(&self) -> &EngineHandle {
        &self.inner
    }
}

impl EngineClient {
    /// Registers a user. Refusals (taken name, empty field) are `Ok` with `success: false`.
    #[instrument(skip(self, params), fields(username = %params.username))]
    pub async fn register_user(&self, params: RegisterUser) -> Result<RegistrationResponse, EngineError> {
        debug!("Sending request");
        Ok(self
            .inner
            .ask(
                |respond_to| EngineMessage::RegisterUser {
                    request: params,
                    respond_to,
                },
                self.timeouts.registration,
            )
            .await?)
    }

    #[instrument(skip(self))]
    pub fn create_community(&self, params: CreateCommunity) -> Result<(), EngineError> {
        self.tell(EngineMessage::CreateCommunity(params))
    }

    #[instrument(skip(self))]
    pub fn join_community(&self, params: JoinCommunity) -> Result<(), EngineError> {
        self.tell(EngineMessage::JoinCommunity(params))
    }

    #[instrument(skip(self))]
    pub fn leave_community(&self, params: LeaveCommunity) -> Result<(), EngineError> {
        self.tell(EngineMessage::LeaveCommunity(params))
    }

    #[instrument(skip(self))]
    pub fn post_to_community(&self, params: PostToCommunity) -> Result<(), EngineError> {
        self.tell(EngineMessage::PostToCommunity(params))
    }

    #[instrument(skip(self))]
    pub fn comment_on_post(&self, params: CommentOnPost) -> Result<(), EngineError> {
        self.tell(EngineMessage::CommentOnPost(params))
    }

    #[instrument(skip(self))]
    pub fn reply_to_comment(&self, params: CommentOnComment) -> Result<(), EngineError> {
        self.tell(EngineMessage::CommentOnComment(params))
    }

    #[instrument(skip(self))]
    pub fn vote_on_post(&self, params: VoteOnPost) -> Result<(), EngineError> {
        self.tell(EngineMessage::VoteOnPost(params))
    }

    #[instrument(skip(self))]
    pub fn vote_on_comment(&self, params: VoteOnComment) -> Result<(), EngineError> {
        self.tell(EngineMessage::VoteOnComment(params))
    }

    #[instrument(skip(self, params), fields(from = %params.from, to = %params.to))]
    pub fn send_direct_message(&self, params: SendDirectMessage) -> Result<(), EngineError> {
        self.tell(EngineMessage::SendDirectMessage(params))
    }

    /// The user's inbox in delivery order; empty for unknown users.
    #[instrument(skip(self))]
    pub async fn get_inbox(&self, username: &str) -> Inbox {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetInbox {
                    username: username.to_string(),
                    respond_to,
                },
                self.timeouts.inbox + REPLY_GRACE,
            )
            .await
            .unwrap_or_default()
    }

    /// Posts of every community the user is subscribed to; empty for unknown users.
    #[instrument(skip(self))]
    pub async fn get_feed(&self, username: &str) -> Feed {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetFeed {
                    username: username.to_string(),
                    respond_to,
                },
                self.timeouts.feed + REPLY_GRACE * 2,
            )
            .await
            .unwrap_or_default()
    }

    #[instrument(skip(self))]
    pub async fn get_community_posts(&self, community: &str) -> Vec<PostView> {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetCommunityPosts {
                    community: community.to_string(),
                    respond_to,
                },
                self.timeouts.post_details + REPLY_GRACE,
            )
            .await
            .unwrap_or_default()
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: &str) -> Option<PostView> {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetPostDetails {
                    post_id: post_id.to_string(),
                    respond_to,
                },
                self.timeouts.post_details,
            )
            .await
            .ok()
    }

    #[instrument(skip(self))]
    pub async fn get_comment(&self, post_id: &str, comment_id: &str) -> Option<CommentView> {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetCommentDetails {
                    post_id: post_id.to_string(),
                    comment_id: comment_id.to_string(),
                    respond_to,
                },
                self.timeouts.post_details,
            )
            .await
            .ok()
    }

    #[instrument(skip(self))]
    pub async fn get_user_profile(&self, username: &str) -> Option<UserProfile> {
        self.inner
            .ask(
                |respond_to| EngineMessage::GetUserProfile {
                    username: username.to_string(),
                    respond_to,
                },
                self.timeouts.inbox,
            )
            .await
            .ok()
    }

    #[instrument(skip(self))]
    pub async fn metrics(&self) -> Result<EngineMetrics, EngineError> {
        Ok(self
            .inner
            .ask(|respond_to| EngineMessage::GetMetrics { respond_to }, self.timeouts.inbox)
            .await?)
    }
}
