//! Core data types for the Storyloom narrative engine.
//!
//! This crate provides the scene data model shared by all providers and the
//! per-session view-state store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod scene;
mod session;

pub use scene::{Choice, Scene};
pub use session::StorySession;
