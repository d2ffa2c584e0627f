use crate::model::PostView;
use crate::post_actor::PostMessage;
use crate::user_actor::UserHandle;
use entity_actor::Response;

#[derive(Debug)]
pub enum CommunityMessage {
    /// Adds the member and tells the user about its new subscription.
    Join { username: String, user: UserHandle },
    /// Removes the member. The user's own subscription is left as it is.
    Leave { username: String },
    Post { author: String, content: String },
    /// Anything addressed to one of this community's posts or its comments.
    ForPost { post_id: String, msg: PostMessage },
    GetPosts { respond_to: Response<Vec<PostView>> },
}
