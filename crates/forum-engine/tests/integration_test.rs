mod common;

use common::*;
use forum_engine::model::*;

/// Integration tests: the full actor tree behind a real engine.
///
/// Commands are fire-and-forget, so every assertion on their effect goes through
/// `eventually`.

#[tokio::test]
async fn test_duplicate_registration_is_refused() {
    let system = quiet_forum();

    let first = register(&system, "alice").await;
    assert!(first.success);
    assert_eq!(first.message, "Registration successful");

    let second = register(&system, "alice").await;
    assert!(!second.success);
    assert_eq!(second.message, "Username already exists");

    let blank = register(&system, "").await;
    assert!(!blank.success);
    assert_eq!(blank.message, "Missing required field: username");

    let metrics = system.engine.metrics().await.unwrap();
    assert_eq!(metrics.users, 1);
    assert_eq!(metrics.total_messages, 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_community_is_ignored() {
    let system = quiet_forum();
    let engine = &system.engine;

    for _ in 0..2 {
        engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    }

    let metrics = engine.metrics().await.unwrap();
    assert_eq!(metrics.communities, 1);
}

#[tokio::test]
async fn test_comment_ids_increase_within_post() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    post(&system, "go", "alice", "hello");

    for content in ["one", "two", "three"] {
        comment(&system, "go_1", "alice", content);
    }

    let ids = eventually(move || async move {
        engine
            .get_post("go_1")
            .await
            .map(|post| post.comment_ids)
            .filter(|ids| ids.len() == 3)
    })
    .await
    .expect("three comments");
    assert_eq!(ids, vec!["go_1_1", "go_1_2", "go_1_3"]);

    let second = engine.get_comment("go_1", "go_1_2").await.unwrap();
    assert_eq!(second.content, "two");
}

#[tokio::test]
async fn test_votes_move_author_karma() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    register(&system, "bob").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    post(&system, "go", "alice", "hello");

    vote(&system, "go_1", "bob", true);
    let karma = eventually(move || async move {
        engine
            .get_user_profile("alice")
            .await
            .map(|profile| profile.karma)
            .filter(|karma| *karma == 1)
    })
    .await;
    assert_eq!(karma, Some(1));
    let upvoted = engine.get_post("go_1").await.unwrap();
    assert_eq!((upvoted.upvotes, upvoted.downvotes), (1, 0));

    vote(&system, "go_1", "bob", false);
    vote(&system, "go_1", "carol", false);
    let karma = eventually(move || async move {
        engine
            .get_user_profile("alice")
            .await
            .map(|profile| profile.karma)
            .filter(|karma| *karma == -1)
    })
    .await;
    assert_eq!(karma, Some(-1));
    let post = engine.get_post("go_1").await.unwrap();
    assert_eq!((post.upvotes, post.downvotes), (1, 2));

    // The voter's own karma is untouched
    assert_eq!(engine.get_user_profile("bob").await.unwrap().karma, 0);
}

#[tokio::test]
async fn test_reads_for_unknown_entities_are_empty() {
    let system = quiet_forum();
    let engine = &system.engine;

    assert!(engine.get_inbox("ghost").await.messages.is_empty());
    assert!(engine.get_feed("ghost").await.posts.is_empty());
    assert!(engine.get_user_profile("ghost").await.is_none());
    assert!(engine.get_community_posts("nowhere").await.is_empty());
    assert!(engine.get_post("nowhere_1").await.is_none());
    assert!(engine.get_post("malformed").await.is_none());

    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    assert!(engine.get_post("go_1").await.is_none());
    assert!(engine.get_comment("go_1", "go_1_1").await.is_none());
}

#[tokio::test]
async fn test_alice_bob_go_scenario() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    register(&system, "bob").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    join(&system, "bob", "go");

    let subscriptions = eventually(move || async move {
        engine
            .get_user_profile("bob")
            .await
            .map(|profile| profile.subscriptions)
            .filter(|subscriptions| !subscriptions.is_empty())
    })
    .await;
    assert_eq!(subscriptions, Some(vec!["go".to_string()]));
    assert!(engine.get_feed("bob").await.posts.is_empty());

    post(&system, "go", "alice", "hello");

    let listing = eventually(move || async move {
        let posts = engine.get_community_posts("go").await;
        (!posts.is_empty()).then_some(posts)
    })
    .await
    .expect("listing");
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].author, "alice");
    assert_eq!(listing[0].content, "hello");
    assert_eq!(listing[0].community, "go");

    let feed = engine.get_feed("bob").await;
    assert_eq!(feed.posts, listing);

    // Alice never joined
    assert!(engine.get_feed("alice").await.posts.is_empty());
}

#[tokio::test]
async fn test_reply_nests_under_parent_comment() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    post(&system, "go", "alice", "hello");
    comment(&system, "go_1", "alice", "first");
    comment(&system, "go_1", "alice", "second");

    engine
        .reply_to_comment(CommentOnComment {
            post_id: "go_1".into(),
            parent_comment_id: "go_1_1".into(),
            author: "bob".into(),
            content: "nested".into(),
        })
        .unwrap();

    let parent = eventually(move || async move {
        engine
            .get_comment("go_1", "go_1_1")
            .await
            .filter(|comment| !comment.replies.is_empty())
    })
    .await
    .expect("reply registered");
    assert_eq!(parent.replies, vec!["go_1_1_1"]);

    let sibling = engine.get_comment("go_1", "go_1_2").await.unwrap();
    assert!(sibling.replies.is_empty());

    let reply = engine.get_comment("go_1", "go_1_1_1").await.unwrap();
    assert_eq!(reply.content, "nested");
    assert_eq!(reply.author, "bob");

    // Replies are not top-level comments of the post
    let post = engine.get_post("go_1").await.unwrap();
    assert_eq!(post.comment_ids, vec!["go_1_1", "go_1_2"]);
}

#[tokio::test]
async fn test_comment_votes_do_not_touch_karma() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    post(&system, "go", "alice", "hello");
    comment(&system, "go_1", "alice", "mine");

    engine
        .vote_on_comment(VoteOnComment {
            post_id: "go_1".into(),
            comment_id: "go_1_1".into(),
            voter: "bob".into(),
            upvote: true,
        })
        .unwrap();

    let voted = eventually(move || async move {
        engine
            .get_comment("go_1", "go_1_1")
            .await
            .filter(|comment| comment.upvotes == 1)
    })
    .await;
    assert!(voted.is_some());
    assert_eq!(engine.get_user_profile("alice").await.unwrap().karma, 0);
}

#[tokio::test]
async fn test_direct_messages_keep_delivery_order() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "alice").await;
    register(&system, "bob").await;

    for content in ["one", "two", "three"] {
        engine
            .send_direct_message(SendDirectMessage {
                from: "bob".into(),
                to: "alice".into(),
                content: content.into(),
            })
            .unwrap();
    }
    // Unknown recipient is dropped
    engine
        .send_direct_message(SendDirectMessage {
            from: "bob".into(),
            to: "ghost".into(),
            content: "hello?".into(),
        })
        .unwrap();

    let inbox = eventually(move || async move {
        let inbox = engine.get_inbox("alice").await;
        (inbox.messages.len() == 3).then_some(inbox)
    })
    .await
    .expect("three messages");

    let contents: Vec<_> = inbox.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
    assert!(inbox.messages.iter().all(|m| m.from == "bob"));
    assert!(inbox.messages.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
    assert!(engine.get_inbox("bob").await.messages.is_empty());
}

#[tokio::test]
async fn test_leave_keeps_user_subscription() {
    let system = quiet_forum();
    let engine = &system.engine;
    register(&system, "bob").await;
    engine.create_community(CreateCommunity { name: "go".into() }).unwrap();
    join(&system, "bob", "go");

    let joined = eventually(move || async move {
        engine
            .get_user_profile("bob")
            .await
            .filter(|profile| profile.subscriptions == ["go"])
    })
    .await;
    assert!(joined.is_some());

    engine
        .leave_community(LeaveCommunity {
            username: "bob".into(),
            community: "go".into(),
        })
        .unwrap();

    // The community drops the member without telling the user
    let metrics = engine.metrics().await.unwrap();
    assert_eq!(metrics.communities, 1);
    let profile = engine.get_user_profile("bob").await.unwrap();
    assert_eq!(profile.subscriptions, vec!["go"]);
}

#[tokio::test]
async fn test_shutdown_stops_the_tree() {
    let system = quiet_forum();
    register(&system, "alice").await;
    system
        .engine
        .create_community(CreateCommunity { name: "go".into() })
        .unwrap();
    post(&system, "go", "alice", "hello");

    let engine = system.engine.clone();
    system.shutdown().await.unwrap();

    assert!(engine.metrics().await.is_err());
    assert!(engine.get_inbox("alice").await.messages.is_empty());
}
