use super::{CommunityError, CommunityMessage};
use crate::config::Timeouts;
use crate::engine::EngineHandle;
use crate::model::NewPostNotification;
use crate::post_actor::{Post, PostMessage};
use crate::user_actor::{UserHandle, UserMessage};
use async_trait::async_trait;
use entity_actor::{fan_out, ActorContext, ActorEntity, ChildRegistry};
use std::collections::HashMap;
use tracing::{debug, info};

pub struct Community {
    name: String,
    members: HashMap<String, UserHandle>,
    posts: ChildRegistry<PostMessage>,
    engine: EngineHandle,
    timeouts: Timeouts,
}

impl Community {
    pub fn new(name: impl Into<String>, engine: EngineHandle, timeouts: Timeouts) -> Self {
        let name = name.into();
        Self {
            posts: ChildRegistry::new(name.clone()),
            name,
            members: HashMap::new(),
            engine,
            timeouts,
        }
    }

    fn broadcast(&self, notification: NewPostNotification) {
        let mut delivered = 0;
        for user in self.members.values() {
            if user
                .tell(UserMessage::NewPostNotification(notification.clone()))
                .is_ok()
            {
                delivered += 1;
            }
        }
        debug!(community = %self.name, post_id = %notification.post_id, delivered, "Post broadcast");
    }
}

#[async_trait]
impl ActorEntity for Community {
    type Message = CommunityMessage;
    type Error = CommunityError;

    async fn handle(
        &mut self,
        msg: CommunityMessage,
        ctx: &ActorContext<Self>,
    ) -> Result<(), CommunityError> {
        match msg {
            CommunityMessage::Join { username, user } => {
                self.members.insert(username.clone(), user.clone());
                info!(community = %self.name, %username, "Member joined");
                user.tell(UserMessage::JoinCommunity {
                    community: self.name.clone(),
                    handle: ctx.myself().clone(),
                })?;
            }
            CommunityMessage::Leave { username } => {
                if self.members.remove(&username).is_some() {
                    info!(community = %self.name, %username, "Member left");
                }
            }
            CommunityMessage::Post { author, content } => {
                let engine = self.engine.clone();
                let seed = (self.name.clone(), author.clone(), content.clone());
                let post_id = self.posts.spawn_child(ctx, |id| {
                    let (community, author, content) = seed;
                    Post::new(id, community, author, content, engine)
                });
                info!(community = %self.name, %post_id, %author, "Post created");
                self.broadcast(NewPostNotification {
                    community: self.name.clone(),
                    post_id,
                    author,
                    content,
                });
            }
            CommunityMessage::ForPost { post_id, msg } => match self.posts.get(&post_id) {
                Some(post) => post.tell(msg)?,
                None => {
                    msg.reject(&post_id);
                    return Err(CommunityError::UnknownPost(post_id));
                }
            },
            CommunityMessage::GetPosts { respond_to } => {
                let posts: Vec<_> = self.posts.handles().cloned().collect();
                let timeout = self.timeouts.post_details;
                tokio::spawn(async move {
                    let views = fan_out(
                        &posts,
                        |respond_to| PostMessage::GetDetails { respond_to },
                        timeout,
                    )
                    .await;
                    let _ = respond_to.send(Ok(views));
                });
            }
        }
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &ActorContext<Self>) {
        self.posts.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineMessage;
    use entity_actor::mock::create_mock_handle;
    use std::time::Duration;

    #[tokio::test]
    async fn test_listing_skips_post_that_misses_its_budget() {
        let (engine, _engine_mailbox) = create_mock_handle::<EngineMessage>();
        let timeouts = Timeouts {
            post_details: Duration::from_millis(200),
            ..Timeouts::default()
        };
        let mut community = Community::new("go", engine, timeouts);
        // go_1 never answers
        let (stalled, _stalled_mailbox) = create_mock_handle::<PostMessage>();
        assert_eq!(community.posts.adopt(stalled), "go_1");

        let community = entity_actor::spawn(community, "local");
        community
            .tell(CommunityMessage::Post {
                author: "alice".into(),
                content: "hello".into(),
            })
            .unwrap();

        let started = tokio::time::Instant::now();
        let listing = community
            .ask(|respond_to| CommunityMessage::GetPosts { respond_to }, Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].post_id, "go_2");
        assert_eq!(listing[0].content, "hello");
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
