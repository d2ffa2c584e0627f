//! # Forum Engine
//!
//! A social content platform (users, communities, posts, comments, votes and direct
//! messages) where every entity is an actor built on [`entity_actor`].
//!
//! This library exposes the core modules of the application for integration testing
//! and for the demo binary.

pub mod clients;
pub mod comment_actor;
pub mod community_actor;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod post_actor;
pub mod user_actor;
