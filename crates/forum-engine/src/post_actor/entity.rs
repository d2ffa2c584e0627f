use super::{PostError, PostMessage};
use crate::comment_actor::{Comment, CommentMessage};
use crate::engine::{EngineHandle, EngineMessage};
use crate::model::PostView;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity_actor::{ActorContext, ActorEntity, ChildRegistry};
use tracing::info;

pub struct Post {
    id: String,
    community: String,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
    upvotes: u64,
    downvotes: u64,
    comments: ChildRegistry<CommentMessage>,
    /// Only used to report karma changes.
    engine: EngineHandle,
}

impl Post {
    pub fn new(id: &str, community: String, author: String, content: String, engine: EngineHandle) -> Self {
        Self {
            id: id.to_string(),
            community,
            author,
            content,
            created_at: Utc::now(),
            upvotes: 0,
            downvotes: 0,
            comments: ChildRegistry::new(id),
            engine,
        }
    }

    fn view(&self) -> PostView {
        PostView {
            post_id: self.id.clone(),
            community: self.community.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            created_at: self.created_at,
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            comment_ids: self.comments.ids().cloned().collect(),
        }
    }
}

#[async_trait]
impl ActorEntity for Post {
    type Message = PostMessage;
    type Error = PostError;

    async fn handle(&mut self, msg: PostMessage, ctx: &ActorContext<Self>) -> Result<(), PostError> {
        match msg {
            PostMessage::Comment { author, content } => {
                let comment_id = self
                    .comments
                    .spawn_child(ctx, |id| Comment::new(id, author, content));
                info!(post_id = %self.id, %comment_id, "Comment created");
            }
            PostMessage::Vote { voter, upvote } => {
                let delta = if upvote {
                    self.upvotes += 1;
                    1
                } else {
                    self.downvotes += 1;
                    -1
                };
                info!(post_id = %self.id, %voter, upvote, "Vote recorded");
                self.engine.tell(EngineMessage::UpdateKarma {
                    username: self.author.clone(),
                    delta,
                })?;
            }
            PostMessage::GetDetails { respond_to } => {
                let _ = respond_to.send(Ok(self.view()));
            }
            PostMessage::ForComment(msg) => match self.comments.owner_of(msg.target_id()) {
                Some(comment) => comment.tell(msg)?,
                None => {
                    let target = msg.target_id().to_string();
                    msg.reject();
                    return Err(PostError::CommentNotFound(target));
                }
            },
        }
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &ActorContext<Self>) {
        self.comments.stop_all();
    }
}
