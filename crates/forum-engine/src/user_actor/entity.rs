use super::UserMessage;
use crate::community_actor::{CommunityHandle, CommunityMessage};
use crate::config::Timeouts;
use crate::model::{DirectMessage, Feed, Inbox, UserProfile};
use async_trait::async_trait;
use chrono::Utc;
use entity_actor::{fan_out, ActorContext, ActorEntity};
use std::collections::BTreeMap;
use std::convert::Infallible;
use tracing::{debug, info};

pub struct UserAccount {
    name: String,
    credential: String,
    karma: i64,
    inbox: Vec<DirectMessage>,
    /// Keyed by community name; feed order follows this map.
    subscriptions: BTreeMap<String, CommunityHandle>,
    timeouts: Timeouts,
}

impl UserAccount {
    pub fn new(name: impl Into<String>, credential: impl Into<String>, timeouts: Timeouts) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
            karma: 0,
            inbox: Vec::new(),
            subscriptions: BTreeMap::new(),
            timeouts,
        }
    }

    /// The stored password, kept as given.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.name.clone(),
            karma: self.karma,
            subscriptions: self.subscriptions.keys().cloned().collect(),
            inbox_size: self.inbox.len(),
        }
    }
}

#[async_trait]
impl ActorEntity for UserAccount {
    type Message = UserMessage;
    type Error = Infallible;

    async fn handle(&mut self, msg: UserMessage, _ctx: &ActorContext<Self>) -> Result<(), Infallible> {
        match msg {
            UserMessage::DirectMessage { from, content } => {
                info!(username = %self.name, %from, "Direct message received");
                self.inbox.push(DirectMessage {
                    from,
                    content,
                    sent_at: Utc::now(),
                });
            }
            UserMessage::GetInbox { respond_to } => {
                let _ = respond_to.send(Ok(Inbox {
                    messages: self.inbox.clone(),
                }));
            }
            UserMessage::JoinCommunity { community, handle } => {
                info!(username = %self.name, %community, "Subscribed");
                self.subscriptions.insert(community, handle);
            }
            UserMessage::LeaveCommunity { community } => {
                if self.subscriptions.remove(&community).is_some() {
                    info!(username = %self.name, %community, "Unsubscribed");
                }
            }
            UserMessage::UpdateKarma { delta } => {
                self.karma += delta;
                debug!(username = %self.name, delta, karma = self.karma, "Karma updated");
            }
            UserMessage::GetFeed { respond_to } => {
                let communities: Vec<_> = self.subscriptions.values().cloned().collect();
                let timeout = self.timeouts.feed;
                let username = self.name.clone();
                tokio::spawn(async move {
                    let listings = fan_out(
                        &communities,
                        |respond_to| CommunityMessage::GetPosts { respond_to },
                        timeout,
                    )
                    .await;
                    let posts: Vec<_> = listings.into_iter().flatten().collect();
                    debug!(%username, posts = posts.len(), "Feed assembled");
                    let _ = respond_to.send(Ok(Feed { posts }));
                });
            }
            UserMessage::NewPostNotification(notification) => {
                info!(
                    username = %self.name,
                    community = %notification.community,
                    post_id = %notification.post_id,
                    author = %notification.author,
                    "New post in subscribed community"
                );
            }
            UserMessage::GetProfile { respond_to } => {
                let _ = respond_to.send(Ok(self.profile()));
            }
        }
        Ok(())
    }
}
