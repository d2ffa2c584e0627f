use crate::model::CommentView;
use entity_actor::{FrameworkError, Response};

/// Messages understood by a [`Comment`](super::Comment), each addressed to a comment id
/// at or below the receiving comment.
#[derive(Debug)]
pub enum CommentMessage {
    Reply {
        target_id: String,
        author: String,
        content: String,
    },
    Vote {
        target_id: String,
        voter: String,
        upvote: bool,
    },
    GetDetails {
        target_id: String,
        respond_to: Response<CommentView>,
    },
}

impl CommentMessage {
    pub fn target_id(&self) -> &str {
        match self {
            CommentMessage::Reply { target_id, .. }
            | CommentMessage::Vote { target_id, .. }
            | CommentMessage::GetDetails { target_id, .. } => target_id,
        }
    }

    /// Gives up on an undeliverable message, answering the caller if there is one.
    pub fn reject(self) {
        if let CommentMessage::GetDetails {
            target_id,
            respond_to,
        } = self
        {
            let _ = respond_to.send(Err(FrameworkError::NotFound(target_id)));
        }
    }
}
