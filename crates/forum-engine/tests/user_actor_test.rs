use chrono::Utc;
use entity_actor::mock::{create_mock_handle, expect_message, MockActor};
use forum_engine::community_actor::CommunityMessage;
use forum_engine::config::Timeouts;
use forum_engine::model::{PostView, UserProfile};
use forum_engine::user_actor::{UserAccount, UserHandle, UserMessage};
use std::time::Duration;

/// Pattern 2: Actor + Mocks
/// - Real User actor (tests the feed fan-out and subscription bookkeeping)
/// - Mocked communities (one answers, one never does)

fn short_timeouts() -> Timeouts {
    Timeouts {
        feed: Duration::from_millis(200),
        ..Timeouts::default()
    }
}

fn post_view(post_id: &str, community: &str) -> PostView {
    PostView {
        post_id: post_id.into(),
        community: community.into(),
        author: "alice".into(),
        content: format!("post {post_id}"),
        created_at: Utc::now(),
        upvotes: 0,
        downvotes: 0,
        comment_ids: Vec::new(),
    }
}

async fn profile(user: &UserHandle) -> UserProfile {
    user.ask(|respond_to| UserMessage::GetProfile { respond_to }, Duration::from_secs(1))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_feed_skips_community_that_times_out() {
    let posts = vec![post_view("alpha_1", "alpha"), post_view("alpha_2", "alpha")];
    let canned = posts.clone();
    let alpha = MockActor::new(move |msg: CommunityMessage| {
        if let CommunityMessage::GetPosts { respond_to } = msg {
            let _ = respond_to.send(Ok(canned.clone()));
        }
    });
    // Kept alive and never read: every ask to it expires
    let (beta, mut beta_mailbox) = create_mock_handle::<CommunityMessage>();

    let user = entity_actor::spawn(UserAccount::new("bob", "pw", short_timeouts()), "local");
    user.tell(UserMessage::JoinCommunity {
        community: "alpha".into(),
        handle: alpha.handle(),
    })
    .unwrap();
    user.tell(UserMessage::JoinCommunity {
        community: "beta".into(),
        handle: beta,
    })
    .unwrap();

    let started = tokio::time::Instant::now();
    let feed = user
        .ask(|respond_to| UserMessage::GetFeed { respond_to }, Duration::from_secs(2))
        .await
        .unwrap();

    assert_eq!(feed.posts, posts);
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(alpha.received(), 1);

    let asked_beta = expect_message(&mut beta_mailbox, |msg| match msg {
        CommunityMessage::GetPosts { .. } => Some(()),
        _ => None,
    })
    .await;
    assert!(asked_beta.is_some());
}

#[tokio::test]
async fn test_feed_without_subscriptions_is_empty() {
    let user = entity_actor::spawn(UserAccount::new("bob", "pw", short_timeouts()), "local");

    let feed = user
        .ask(|respond_to| UserMessage::GetFeed { respond_to }, Duration::from_secs(1))
        .await
        .unwrap();
    assert!(feed.posts.is_empty());
}

#[tokio::test]
async fn test_user_keeps_serving_while_feed_is_pending() {
    let (silent, _silent_mailbox) = create_mock_handle::<CommunityMessage>();
    let timeouts = Timeouts {
        feed: Duration::from_millis(500),
        ..Timeouts::default()
    };
    let user = entity_actor::spawn(UserAccount::new("bob", "pw", timeouts), "local");
    user.tell(UserMessage::JoinCommunity {
        community: "quiet".into(),
        handle: silent,
    })
    .unwrap();

    let pending = tokio::spawn({
        let user = user.clone();
        async move {
            user.ask(|respond_to| UserMessage::GetFeed { respond_to }, Duration::from_secs(2))
                .await
        }
    });

    // Answered long before the feed's fan-out gives up
    let started = tokio::time::Instant::now();
    user.tell(UserMessage::UpdateKarma { delta: 2 }).unwrap();
    assert_eq!(profile(&user).await.karma, 2);
    assert!(started.elapsed() < Duration::from_millis(400));

    let feed = pending.await.unwrap().unwrap();
    assert!(feed.posts.is_empty());
}

#[tokio::test]
async fn test_subscriptions_and_karma_bookkeeping() {
    let (go, _go_mailbox) = create_mock_handle::<CommunityMessage>();
    let (rust, _rust_mailbox) = create_mock_handle::<CommunityMessage>();
    let user = entity_actor::spawn(UserAccount::new("bob", "pw", Timeouts::default()), "local");

    user.tell(UserMessage::JoinCommunity { community: "rust".into(), handle: rust }).unwrap();
    user.tell(UserMessage::JoinCommunity { community: "go".into(), handle: go }).unwrap();
    user.tell(UserMessage::LeaveCommunity { community: "rust".into() }).unwrap();
    user.tell(UserMessage::LeaveCommunity { community: "never-joined".into() }).unwrap();
    for delta in [5, -7, 1] {
        user.tell(UserMessage::UpdateKarma { delta }).unwrap();
    }
    user.tell(UserMessage::DirectMessage {
        from: "alice".into(),
        content: "hi".into(),
    })
    .unwrap();

    let profile = profile(&user).await;
    assert_eq!(profile.username, "bob");
    assert_eq!(profile.subscriptions, vec!["go"]);
    assert_eq!(profile.karma, -1);
    assert_eq!(profile.inbox_size, 1);
}
