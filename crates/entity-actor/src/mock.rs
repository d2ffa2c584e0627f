//! # Mock Framework & Testing Guide
//!
//! Mock handles look exactly like real [`ActorHandle`]s to the code under test, but the
//! other end of the mailbox belongs to the test. This makes it easy to put a real actor
//! next to collaborators that answer with canned data, record what they were sent, or
//! never answer at all.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock handle | Real Actor |
//! |---------|-------------|------------|
//! | **Determinism** | The test decides every reply | Subject to scheduler |
//! | **State** | None | Real state management |
//! | **Failure injection** | Easy (drop or ignore the reply) | Hard |
//! | **Use Case** | Isolating one actor | Testing the full tree |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 1: Inspect what an actor sends</b></summary>
//!
//! Hand the actor under test a handle from [`create_mock_handle`] and read its outbound
//! traffic with [`MockMailbox::next_message`] or [`expect_message`].
//!
//! ```rust
//! use entity_actor::mock::{create_mock_handle, expect_message};
//!
//! #[derive(Debug)]
//! enum Audit { Recorded(String) }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (handle, mut mailbox) = create_mock_handle::<Audit>();
//!     handle.tell(Audit::Recorded("vote".into())).unwrap();
//!
//!     let entry = expect_message(&mut mailbox, |msg| match msg {
//!         Audit::Recorded(entry) => Some(entry),
//!     })
//!     .await;
//!     assert_eq!(entry.as_deref(), Some("vote"));
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Scripted collaborator</b></summary>
//!
//! [`MockActor`] runs a closure for every message, which is enough to answer asks with
//! canned replies.
//!
//! ```rust
//! use entity_actor::mock::MockActor;
//! use entity_actor::Response;
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! enum Ping { Ping { respond_to: Response<&'static str> } }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockActor::new(|msg: Ping| match msg {
//!         Ping::Ping { respond_to } => { let _ = respond_to.send(Ok("pong")); }
//!     });
//!
//!     let reply = mock
//!         .handle()
//!         .ask(|respond_to| Ping::Ping { respond_to }, Duration::from_secs(1))
//!         .await;
//!     assert_eq!(reply, Ok("pong"));
//!     assert_eq!(mock.received(), 1);
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 3: Silent collaborator (timeouts)</b></summary>
//!
//! Keep the [`MockMailbox`] alive and never read it: every ask to that handle expires at
//! its timeout, which is how partial-failure behavior of fan-outs is exercised.
//! Dropping the mailbox instead makes asks fail immediately with `ActorClosed`.
//! </details>

use crate::client::{ActorHandle, ActorId};
use crate::message::Envelope;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Node address stamped on every mock handle.
pub const MOCK_ADDRESS: &str = "mock";

/// How long [`expect_message`] waits before giving up.
pub const EXPECT_TIMEOUT: Duration = Duration::from_secs(2);

/// The test-owned end of a mock handle.
pub struct MockMailbox<M> {
    receiver: mpsc::UnboundedReceiver<Envelope<M>>,
    stopped: bool,
}

impl<M> MockMailbox<M> {
    /// Waits for the next domain message. Stop requests are recorded and skipped.
    pub async fn next_message(&mut self) -> Option<M> {
        loop {
            match self.receiver.recv().await? {
                Envelope::Message(msg) => return Some(msg),
                Envelope::Stop => self.stopped = true,
            }
        }
    }

    /// Returns a message that is already queued, without waiting.
    pub fn try_next_message(&mut self) -> Option<M> {
        loop {
            match self.receiver.try_recv().ok()? {
                Envelope::Message(msg) => return Some(msg),
                Envelope::Stop => self.stopped = true,
            }
        }
    }

    /// True once a stop request has been observed by one of the read methods.
    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

/// Creates a mock handle and the mailbox behind it.
///
/// # Testing Strategy
/// We don't want to spin up a whole actor tree just to observe what one actor sends to a
/// neighbour. The handle returned here can be given to the actor under test; the test
/// reads the neighbour's side from the mailbox and decides whether and how to reply.
pub fn create_mock_handle<M: Send + 'static>() -> (ActorHandle<M>, MockMailbox<M>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let handle = ActorHandle::new(ActorId::new(MOCK_ADDRESS), sender);
    (
        handle,
        MockMailbox {
            receiver,
            stopped: false,
        },
    )
}

/// Waits for the next message and extracts the part the test cares about.
///
/// Returns `None` when the message does not match, the mailbox closes, or nothing
/// arrives within [`EXPECT_TIMEOUT`].
pub async fn expect_message<M, T>(
    mailbox: &mut MockMailbox<M>,
    extract: impl FnOnce(M) -> Option<T>,
) -> Option<T> {
    let msg = tokio::time::timeout(EXPECT_TIMEOUT, mailbox.next_message())
        .await
        .ok()??;
    extract(msg)
}

/// A mock actor that runs a closure for every message it receives.
pub struct MockActor<M> {
    handle: ActorHandle<M>,
    received: Arc<AtomicUsize>,
    _task: tokio::task::JoinHandle<()>,
}

impl<M: Send + 'static> MockActor<M> {
    /// Spawns the mock. `respond` sees messages in arrival order.
    pub fn new(mut respond: impl FnMut(M) + Send + 'static) -> Self {
        let (handle, mut mailbox) = create_mock_handle::<M>();
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();

        let task = tokio::spawn(async move {
            while let Some(msg) = mailbox.next_message().await {
                counter.fetch_add(1, Ordering::SeqCst);
                respond(msg);
            }
        });

        Self {
            handle,
            received,
            _task: task,
        }
    }

    /// Returns a handle for use in tests.
    pub fn handle(&self) -> ActorHandle<M> {
        self.handle.clone()
    }

    /// Number of domain messages processed so far.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}
