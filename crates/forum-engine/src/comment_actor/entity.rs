use super::{CommentError, CommentMessage};
use crate::model::CommentView;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity_actor::{ActorContext, ActorEntity, ChildRegistry};
use tracing::info;

pub struct Comment {
    id: String,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
    upvotes: u64,
    downvotes: u64,
    replies: ChildRegistry<CommentMessage>,
}

impl Comment {
    pub fn new(id: &str, author: String, content: String) -> Self {
        Self {
            id: id.to_string(),
            author,
            content,
            created_at: Utc::now(),
            upvotes: 0,
            downvotes: 0,
            replies: ChildRegistry::new(id),
        }
    }

    fn view(&self) -> CommentView {
        CommentView {
            comment_id: self.id.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            created_at: self.created_at,
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            replies: self.replies.ids().cloned().collect(),
        }
    }

    fn forward(&self, msg: CommentMessage) -> Result<(), CommentError> {
        match self.replies.owner_of(msg.target_id()) {
            Some(reply) => Ok(reply.tell(msg)?),
            None => {
                let target = msg.target_id().to_string();
                msg.reject();
                Err(CommentError::CommentNotFound(target))
            }
        }
    }
}

#[async_trait]
impl ActorEntity for Comment {
    type Message = CommentMessage;
    type Error = CommentError;

    async fn handle(
        &mut self,
        msg: CommentMessage,
        ctx: &ActorContext<Self>,
    ) -> Result<(), CommentError> {
        if msg.target_id() != self.id {
            return self.forward(msg);
        }

        match msg {
            CommentMessage::Reply {
                author, content, ..
            } => {
                let reply_id = self
                    .replies
                    .spawn_child(ctx, |id| Comment::new(id, author, content));
                info!(comment_id = %self.id, %reply_id, "Reply created");
            }
            CommentMessage::Vote { voter, upvote, .. } => {
                if upvote {
                    self.upvotes += 1;
                } else {
                    self.downvotes += 1;
                }
                info!(comment_id = %self.id, %voter, upvote, "Comment vote recorded");
            }
            CommentMessage::GetDetails { respond_to, .. } => {
                let _ = respond_to.send(Ok(self.view()));
            }
        }
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &ActorContext<Self>) {
        self.replies.stop_all();
    }
}
