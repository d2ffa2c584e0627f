//! # Client Facades
//!
//! Typed wrappers around actor handles. Outside code never builds an
//! [`EngineMessage`](crate::engine::EngineMessage) itself; it calls methods on
//! [`EngineClient`], which also owns the ask timeouts and the empty fallbacks.

pub mod engine_client;

pub use engine_client::EngineClient;
