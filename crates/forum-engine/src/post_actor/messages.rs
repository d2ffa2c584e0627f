use crate::comment_actor::CommentMessage;
use crate::model::PostView;
use entity_actor::{FrameworkError, Response};

#[derive(Debug)]
pub enum PostMessage {
    /// A new top-level comment.
    Comment { author: String, content: String },
    Vote { voter: String, upvote: bool },
    GetDetails { respond_to: Response<PostView> },
    /// Anything addressed to a comment in this post's threads.
    ForComment(CommentMessage),
}

impl PostMessage {
    /// Gives up on a message that could not reach `post_id`, answering the caller if
    /// there is one.
    pub fn reject(self, post_id: &str) {
        match self {
            PostMessage::GetDetails { respond_to } => {
                let _ = respond_to.send(Err(FrameworkError::NotFound(post_id.to_string())));
            }
            PostMessage::ForComment(msg) => msg.reject(),
            PostMessage::Comment { .. } | PostMessage::Vote { .. } => {}
        }
    }
}
