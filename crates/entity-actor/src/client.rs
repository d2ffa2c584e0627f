//! # Actor Handles
//!
//! This module defines the client half of every actor: the [`ActorHandle`], an opaque,
//! cloneable reference carrying the actor's [`ActorId`] and the sending end of its mailbox.

use crate::error::FrameworkError;
use crate::message::{Envelope, Response};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

static NEXT_ACTOR_SEQ: AtomicU64 = AtomicU64::new(1);

/// Identity of an actor: the network address of the node hosting it plus a
/// sequence number unique within the process.
///
/// The pair is what a remote transport would need to route a message, so nothing in the
/// domain layer should assume a handle points into the same process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId {
    address: String,
    seq: u64,
}

impl ActorId {
    /// Allocates a fresh id on the given node address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            seq: NEXT_ACTOR_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.seq)
    }
}

/// ## ActorHandle
///
/// The `ActorHandle<M>` is how anything talks to an actor whose mailbox accepts `M`.
///
/// * **Cloneable** – holds only an id and a sender, so cloning is inexpensive.
/// * **Fire-and-forget** – [`tell`](Self::tell) enqueues without waiting. Messages from the
///   same sender to the same actor keep their send order.
/// * **Ask** – [`ask`](Self::ask) builds a request around a fresh one-shot channel and waits
///   for exactly one reply or the timeout, whichever comes first.
pub struct ActorHandle<M> {
    id: ActorId,
    sender: mpsc::UnboundedSender<Envelope<M>>,
}

impl<M> Clone for ActorHandle<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            sender: self.sender.clone(),
        }
    }
}

impl<M> Debug for ActorHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActorHandle").field(&self.id.to_string()).finish()
    }
}

impl<M: Send + 'static> ActorHandle<M> {
    pub fn new(id: ActorId, sender: mpsc::UnboundedSender<Envelope<M>>) -> Self {
        Self { id, sender }
    }

    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// Enqueues a message without waiting for it to be processed.
    ///
    /// Fails only when the actor has already shut down.
    pub fn tell(&self, msg: M) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Message(msg))
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// Sends a request built by `make` and waits up to `timeout` for its reply.
    ///
    /// A closed mailbox, a dropped reply channel, an explicit error reply and an expired
    /// timer all surface as `Err`. The callee is not told when the caller gives up.
    pub async fn ask<R>(
        &self,
        make: impl FnOnce(Response<R>) -> M,
        timeout: Duration,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.tell(make(respond_to))?;
        match tokio::time::timeout(timeout, response).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(FrameworkError::ActorDropped),
            Err(_) => Err(FrameworkError::Timeout(timeout)),
        }
    }

    /// Asks the actor to stop after the messages already in its mailbox.
    pub fn stop(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Stop)
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// True once the actor's event loop has exited.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Asks every target concurrently and keeps the successful replies, in target order.
///
/// Each leg has its own `timeout`; a slow or dead target only loses its own
/// contribution. Failed legs are logged at debug and otherwise indistinguishable.
pub async fn fan_out<'a, M, R, I, F>(targets: I, make: F, timeout: Duration) -> Vec<R>
where
    M: Send + 'static,
    I: IntoIterator<Item = &'a ActorHandle<M>>,
    F: Fn(Response<R>) -> M,
{
    let make = &make;
    let asks = targets.into_iter().map(move |target| async move {
        (target.id().clone(), target.ask(make, timeout).await)
    });

    join_all(asks)
        .await
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(actor = %id, error = %e, "Fan-out leg failed");
                None
            }
        })
        .collect()
}
