use super::{EngineError, EngineMessage};
use crate::comment_actor::CommentMessage;
use crate::community_actor::{Community, CommunityHandle, CommunityMessage};
use crate::config::{EngineConfig, Timeouts, REPLY_GRACE};
use crate::model::*;
use crate::post_actor::PostMessage;
use crate::user_actor::{UserAccount, UserHandle, UserMessage};
use async_trait::async_trait;
use entity_actor::{ActorContext, ActorEntity, FrameworkError};
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Name of the community that owns `post_id`, when the id has the form `<community>_<n>`.
pub fn community_of(post_id: &str) -> Option<&str> {
    let (community, seq) = post_id.rsplit_once('_')?;
    let numeric = !seq.is_empty() && seq.bytes().all(|b| b.is_ascii_digit());
    (numeric && !community.is_empty()).then_some(community)
}

fn require(request: &impl Validate) -> Result<(), EngineError> {
    match request.missing_field() {
        Some(field) => Err(EngineError::MissingField(field)),
        None => Ok(()),
    }
}

pub struct Engine {
    users: HashMap<String, UserHandle>,
    communities: HashMap<String, CommunityHandle>,
    total_messages: u64,
    timeouts: Timeouts,
    metrics_interval: Option<Duration>,
    ticker: Option<JoinHandle<()>>,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            users: HashMap::new(),
            communities: HashMap::new(),
            total_messages: 0,
            timeouts: config.timeouts(),
            metrics_interval: config.metrics_interval(),
            ticker: None,
        }
    }

    fn user(&self, username: &str) -> Result<&UserHandle, EngineError> {
        self.users
            .get(username)
            .ok_or_else(|| EngineError::UnknownUser(username.to_string()))
    }

    fn community(&self, name: &str) -> Result<&CommunityHandle, EngineError> {
        self.communities
            .get(name)
            .ok_or_else(|| EngineError::UnknownCommunity(name.to_string()))
    }

    fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            total_messages: self.total_messages,
            users: self.users.len(),
            communities: self.communities.len(),
        }
    }

    fn register(&mut self, request: RegisterUser, ctx: &ActorContext<Self>) -> Result<(), EngineError> {
        require(&request)?;
        if self.users.contains_key(&request.username) {
            return Err(EngineError::UsernameTaken(request.username));
        }

        let user = ctx.spawn(UserAccount::new(
            request.username.clone(),
            request.password,
            self.timeouts,
        ));
        info!(username = %request.username, "User registered");
        self.users.insert(request.username, user);
        Ok(())
    }

    fn create_community(
        &mut self,
        request: CreateCommunity,
        ctx: &ActorContext<Self>,
    ) -> Result<(), EngineError> {
        require(&request)?;
        if self.communities.contains_key(&request.name) {
            return Err(EngineError::CommunityExists(request.name));
        }

        let community = ctx.spawn(Community::new(
            request.name.clone(),
            ctx.myself().clone(),
            self.timeouts,
        ));
        info!(community = %request.name, "Community created");
        self.communities.insert(request.name, community);
        Ok(())
    }

    /// Hands `msg` to the community owning `post_id`, or answers it as not found.
    fn route_to_post(&self, post_id: String, msg: PostMessage) -> Result<(), EngineError> {
        let community = community_of(&post_id)
            .ok_or_else(|| EngineError::MalformedPostId(post_id.clone()))
            .and_then(|name| self.community(name));

        match community {
            Ok(community) => Ok(community.tell(CommunityMessage::ForPost { post_id, msg })?),
            Err(e) => {
                msg.reject(&post_id);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ActorEntity for Engine {
    type Message = EngineMessage;
    type Error = EngineError;

    async fn on_start(&mut self, ctx: &ActorContext<Self>) -> Result<(), EngineError> {
        if let Some(period) = self.metrics_interval {
            let engine = ctx.myself().clone();
            self.ticker = Some(tokio::spawn(async move {
                let start = tokio::time::Instant::now() + period;
                let mut ticks = tokio::time::interval_at(start, period);
                loop {
                    ticks.tick().await;
                    if engine.tell(EngineMessage::ReportMetrics).is_err() {
                        break;
                    }
                }
            }));
        }
        Ok(())
    }

    async fn handle(&mut self, msg: EngineMessage, ctx: &ActorContext<Self>) -> Result<(), EngineError> {
        self.total_messages += 1;

        match msg {
            EngineMessage::RegisterUser {
                request,
                respond_to,
            } => {
                let username = request.username.clone();
                let response = match self.register(request, ctx) {
                    Ok(()) => RegistrationResponse::accepted(),
                    Err(e) => {
                        info!(%username, reason = %e, "Registration rejected");
                        RegistrationResponse::rejected(e.to_string())
                    }
                };
                let _ = respond_to.send(Ok(response));
            }
            EngineMessage::CreateCommunity(request) => self.create_community(request, ctx)?,
            EngineMessage::JoinCommunity(request) => {
                require(&request)?;
                let user = self.user(&request.username)?.clone();
                self.community(&request.community)?.tell(CommunityMessage::Join {
                    username: request.username,
                    user,
                })?;
            }
            EngineMessage::LeaveCommunity(request) => {
                require(&request)?;
                self.user(&request.username)?;
                self.community(&request.community)?.tell(CommunityMessage::Leave {
                    username: request.username,
                })?;
            }
            EngineMessage::PostToCommunity(request) => {
                require(&request)?;
                self.community(&request.community)?.tell(CommunityMessage::Post {
                    author: request.author,
                    content: request.content,
                })?;
            }
            EngineMessage::CommentOnPost(request) => {
                require(&request)?;
                self.route_to_post(
                    request.post_id,
                    PostMessage::Comment {
                        author: request.author,
                        content: request.content,
                    },
                )?;
            }
            EngineMessage::CommentOnComment(request) => {
                require(&request)?;
                self.route_to_post(
                    request.post_id,
                    PostMessage::ForComment(CommentMessage::Reply {
                        target_id: request.parent_comment_id,
                        author: request.author,
                        content: request.content,
                    }),
                )?;
            }
            EngineMessage::VoteOnPost(request) => {
                require(&request)?;
                self.route_to_post(
                    request.post_id,
                    PostMessage::Vote {
                        voter: request.voter,
                        upvote: request.upvote,
                    },
                )?;
            }
            EngineMessage::VoteOnComment(request) => {
                require(&request)?;
                self.route_to_post(
                    request.post_id,
                    PostMessage::ForComment(CommentMessage::Vote {
                        target_id: request.comment_id,
                        voter: request.voter,
                        upvote: request.upvote,
                    }),
                )?;
            }
            EngineMessage::SendDirectMessage(request) => {
                require(&request)?;
                self.user(&request.to)?.tell(UserMessage::DirectMessage {
                    from: request.from,
                    content: request.content,
                })?;
            }
            EngineMessage::UpdateKarma { username, delta } => {
                self.user(&username)?.tell(UserMessage::UpdateKarma { delta })?;
            }
            EngineMessage::GetInbox {
                username,
                respond_to,
            } => {
                let Some(user) = self.users.get(&username).cloned() else {
                    let _ = respond_to.send(Ok(Inbox::default()));
                    return Err(EngineError::UnknownUser(username));
                };
                let timeout = self.timeouts.inbox;
                tokio::spawn(async move {
                    let inbox = user
                        .ask(|respond_to| UserMessage::GetInbox { respond_to }, timeout)
                        .await
                        .unwrap_or_else(|e| {
                            warn!(%username, error = %e, "Inbox unavailable");
                            Inbox::default()
                        });
                    let _ = respond_to.send(Ok(inbox));
                });
            }
            EngineMessage::GetFeed {
                username,
                respond_to,
            } => {
                let Some(user) = self.users.get(&username).cloned() else {
                    let _ = respond_to.send(Ok(Feed::default()));
                    return Err(EngineError::UnknownUser(username));
                };
                // The user spends up to `feed` on its own fan-out
                let timeout = self.timeouts.feed + REPLY_GRACE;
                tokio::spawn(async move {
                    let feed = user
                        .ask(|respond_to| UserMessage::GetFeed { respond_to }, timeout)
                        .await
                        .unwrap_or_else(|e| {
                            warn!(%username, error = %e, "Feed unavailable");
                            Feed::default()
                        });
                    let _ = respond_to.send(Ok(feed));
                });
            }
            EngineMessage::GetCommunityPosts {
                community,
                respond_to,
            } => match self.communities.get(&community) {
                Some(handle) => handle.tell(CommunityMessage::GetPosts { respond_to })?,
                None => {
                    let _ = respond_to.send(Ok(Vec::new()));
                    return Err(EngineError::UnknownCommunity(community));
                }
            },
            EngineMessage::GetPostDetails {
                post_id,
                respond_to,
            } => {
                self.route_to_post(post_id, PostMessage::GetDetails { respond_to })?;
            }
            EngineMessage::GetCommentDetails {
                post_id,
                comment_id,
                respond_to,
            } => {
                self.route_to_post(
                    post_id,
                    PostMessage::ForComment(CommentMessage::GetDetails {
                        target_id: comment_id,
                        respond_to,
                    }),
                )?;
            }
            EngineMessage::GetUserProfile {
                username,
                respond_to,
            } => match self.users.get(&username) {
                Some(user) => user.tell(UserMessage::GetProfile { respond_to })?,
                None => {
                    let _ = respond_to.send(Err(FrameworkError::NotFound(username.clone())));
                    return Err(EngineError::UnknownUser(username));
                }
            },
            EngineMessage::GetMetrics { respond_to } => {
                let _ = respond_to.send(Ok(self.metrics()));
            }
            EngineMessage::ReportMetrics => {
                let metrics = self.metrics();
                info!(
                    total_messages = metrics.total_messages,
                    users = metrics.users,
                    communities = metrics.communities,
                    "Engine metrics"
                );
            }
        }
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &ActorContext<Self>) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        for user in self.users.values() {
            let _ = user.stop();
        }
        for community in self.communities.values() {
            let _ = community.stop();
        }
        info!(
            total_messages = self.total_messages,
            users = self.users.len(),
            communities = self.communities.len(),
            "Engine stopped"
        );
    }
}
