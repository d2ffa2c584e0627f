//! # Wire Model
//!
//! Plain data shuttled between the outside world and the engine. Nothing here holds a
//! handle or talks to an actor; requests are what a façade decodes, views are what the
//! engine answers with.

pub mod requests;
pub mod views;

pub use requests::*;
pub use views::*;
