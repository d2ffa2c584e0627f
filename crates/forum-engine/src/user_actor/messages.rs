use crate::community_actor::CommunityHandle;
use crate::model::{Feed, Inbox, NewPostNotification, UserProfile};
use entity_actor::Response;

#[derive(Debug)]
pub enum UserMessage {
    /// Appended to the inbox, stamped on arrival.
    DirectMessage { from: String, content: String },
    GetInbox { respond_to: Response<Inbox> },
    JoinCommunity { community: String, handle: CommunityHandle },
    LeaveCommunity { community: String },
    UpdateKarma { delta: i64 },
    GetFeed { respond_to: Response<Feed> },
    NewPostNotification(NewPostNotification),
    GetProfile { respond_to: Response<UserProfile> },
}
