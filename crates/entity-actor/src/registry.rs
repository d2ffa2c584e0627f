//! # Child Registry
//!
//! An owning container of child actors keyed by deterministic ids.
//!
//! A parent with id `P` names its children `P_1`, `P_2`, ... in spawn order. The counter
//! only grows, so an id is never handed out twice. Because every descendant id starts
//! with its ancestors' ids, a parent can tell which of its children owns any id below it
//! without asking anyone (see [`ChildRegistry::owner_of`]).
//!
//! Iteration ([`ChildRegistry::ids`], [`ChildRegistry::handles`]) follows spawn order.

use crate::actor::ActorContext;
use crate::client::ActorHandle;
use crate::entity::ActorEntity;
use std::collections::HashMap;

pub struct ChildRegistry<M> {
    parent_id: String,
    order: Vec<String>,
    children: HashMap<String, ActorHandle<M>>,
}

impl<M: Send + 'static> ChildRegistry<M> {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            order: Vec::new(),
            children: HashMap::new(),
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    /// Allocates the next child id and spawns the child built from it on the parent's node.
    ///
    /// Returns the new id; the child is registered before this returns.
    pub fn spawn_child<P, C>(&mut self, ctx: &ActorContext<P>, build: impl FnOnce(&str) -> C) -> String
    where
        P: ActorEntity,
        C: ActorEntity<Message = M>,
    {
        let handle = ctx.spawn(build(&self.next_id()));
        self.adopt(handle)
    }

    /// Registers an actor started elsewhere as the next child and returns its id.
    pub fn adopt(&mut self, handle: ActorHandle<M>) -> String {
        let id = self.next_id();
        self.children.insert(id.clone(), handle);
        self.order.push(id.clone());
        id
    }

    /// The id the next registered child will get.
    pub fn next_id(&self) -> String {
        format!("{}_{}", self.parent_id, self.order.len() + 1)
    }

    pub fn get(&self, id: &str) -> Option<&ActorHandle<M>> {
        self.children.get(id)
    }

    /// Finds the direct child whose subtree contains `descendant`.
    ///
    /// `descendant` may be the child's own id or the id of anything spawned below it.
    pub fn owner_of(&self, descendant: &str) -> Option<&ActorHandle<M>> {
        let rest = descendant
            .strip_prefix(self.parent_id.as_str())?
            .strip_prefix('_')?;
        let segment = rest.split('_').next()?;
        self.children.get(&format!("{}_{}", self.parent_id, segment))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = &ActorHandle<M>> {
        self.order.iter().filter_map(|id| self.children.get(id))
    }

    /// Sends a stop request to every child. Children that are already gone are skipped.
    pub fn stop_all(&self) {
        for handle in self.children.values() {
            let _ = handle.stop();
        }
    }
}
