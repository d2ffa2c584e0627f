use crate::model::*;
use entity_actor::Response;

/// Everything the engine accepts.
///
/// Requests that change state are fire-and-forget, except registration which answers
/// with a [`RegistrationResponse`]. Reads carry a responder.
#[derive(Debug)]
pub enum EngineMessage {
    RegisterUser {
        request: RegisterUser,
        respond_to: Response<RegistrationResponse>,
    },
    CreateCommunity(CreateCommunity),
    JoinCommunity(JoinCommunity),
    LeaveCommunity(LeaveCommunity),
    PostToCommunity(PostToCommunity),
    CommentOnPost(CommentOnPost),
    CommentOnComment(CommentOnComment),
    VoteOnPost(VoteOnPost),
    VoteOnComment(VoteOnComment),
    SendDirectMessage(SendDirectMessage),
    /// Sent by posts when they are voted on.
    UpdateKarma {
        username: String,
        delta: i64,
    },

    GetInbox {
        username: String,
        respond_to: Response<Inbox>,
    },
    GetFeed {
        username: String,
        respond_to: Response<Feed>,
    },
    GetCommunityPosts {
        community: String,
        respond_to: Response<Vec<PostView>>,
    },
    GetPostDetails {
        post_id: String,
        respond_to: Response<PostView>,
    },
    GetCommentDetails {
        post_id: String,
        comment_id: String,
        respond_to: Response<CommentView>,
    },
    GetUserProfile {
        username: String,
        respond_to: Response<UserProfile>,
    },
    GetMetrics {
        respond_to: Response<EngineMetrics>,
    },
    /// Self-sent by the metrics ticker.
    ReportMetrics,
}
