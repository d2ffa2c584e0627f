use entity_actor::mock::{create_mock_handle, expect_message, MockMailbox};
use entity_actor::FrameworkError;
use forum_engine::community_actor::{Community, CommunityHandle, CommunityMessage};
use forum_engine::config::Timeouts;
use forum_engine::engine::EngineMessage;
use forum_engine::model::NewPostNotification;
use forum_engine::post_actor::PostMessage;
use forum_engine::user_actor::UserMessage;
use std::time::Duration;

/// Pattern 1: Inspect what an actor sends
/// - Real Community actor
/// - Mock user handles recording subscriptions and post notifications

fn spawn_community() -> (CommunityHandle, MockMailbox<EngineMessage>) {
    let (engine, engine_mailbox) = create_mock_handle::<EngineMessage>();
    let community = entity_actor::spawn(Community::new("go", engine, Timeouts::default()), "local");
    (community, engine_mailbox)
}

/// Joins a mock user and consumes the subscription the community sends back.
async fn join(community: &CommunityHandle, username: &str) -> MockMailbox<UserMessage> {
    let (user, mut mailbox) = create_mock_handle::<UserMessage>();
    community
        .tell(CommunityMessage::Join {
            username: username.into(),
            user,
        })
        .unwrap();

    let subscribed = expect_message(&mut mailbox, |msg| match msg {
        UserMessage::JoinCommunity { community, .. } => Some(community),
        _ => None,
    })
    .await;
    assert_eq!(subscribed.as_deref(), Some("go"));
    mailbox
}

fn post(community: &CommunityHandle, content: &str) {
    community
        .tell(CommunityMessage::Post {
            author: "alice".into(),
            content: content.into(),
        })
        .unwrap();
}

async fn notification(mailbox: &mut MockMailbox<UserMessage>) -> Option<NewPostNotification> {
    expect_message(mailbox, |msg| match msg {
        UserMessage::NewPostNotification(notification) => Some(notification),
        _ => None,
    })
    .await
}

#[tokio::test]
async fn test_new_post_is_announced_to_every_member() {
    let (community, _engine) = spawn_community();
    let mut bob = join(&community, "bob").await;
    let mut carol = join(&community, "carol").await;

    post(&community, "hello");

    for mailbox in [&mut bob, &mut carol] {
        let announced = notification(mailbox).await.expect("notification");
        assert_eq!(
            announced,
            NewPostNotification {
                community: "go".into(),
                post_id: "go_1".into(),
                author: "alice".into(),
                content: "hello".into(),
            }
        );
    }
}

#[tokio::test]
async fn test_member_who_left_is_not_notified() {
    let (community, _engine) = spawn_community();
    let mut bob = join(&community, "bob").await;
    let mut carol = join(&community, "carol").await;

    post(&community, "first");
    assert!(notification(&mut bob).await.is_some());
    assert!(notification(&mut carol).await.is_some());

    community
        .tell(CommunityMessage::Leave {
            username: "bob".into(),
        })
        .unwrap();
    post(&community, "second");

    let announced = notification(&mut carol).await.expect("notification");
    assert_eq!(announced.post_id, "go_2");
    // Carol's copy arrived, so the broadcast is over
    assert!(bob.try_next_message().is_none());
}

#[tokio::test]
async fn test_unknown_post_is_not_found() {
    let (community, _engine) = spawn_community();
    post(&community, "hello");

    let missing = community
        .ask(
            |respond_to| CommunityMessage::ForPost {
                post_id: "go_9".into(),
                msg: PostMessage::GetDetails { respond_to },
            },
            Duration::from_secs(1),
        )
        .await;
    assert_eq!(missing, Err(FrameworkError::NotFound("go_9".into())));

    let found = community
        .ask(
            |respond_to| CommunityMessage::ForPost {
                post_id: "go_1".into(),
                msg: PostMessage::GetDetails { respond_to },
            },
            Duration::from_secs(1),
        )
        .await
        .unwrap();
    assert_eq!(found.content, "hello");
}

#[tokio::test]
async fn test_votes_routed_through_community_reach_the_engine() {
    let (community, mut engine) = spawn_community();
    post(&community, "hello");

    community
        .tell(CommunityMessage::ForPost {
            post_id: "go_1".into(),
            msg: PostMessage::Vote {
                voter: "bob".into(),
                upvote: true,
            },
        })
        .unwrap();

    let karma = expect_message(&mut engine, |msg| match msg {
        EngineMessage::UpdateKarma { username, delta } => Some((username, delta)),
        _ => None,
    })
    .await;
    assert_eq!(karma, Some(("alice".to_string(), 1)));
}
