//! HTTP API boundary for the Storyloom narrative engine.
//!
//! Two JSON request/response endpoints drive a playthrough:
//!
//! - `POST /api/story/start`: generate the opening scene from a premise
//!   and genre.
//! - `POST /api/story/next`: generate the continuation scene for a
//!   committed choice.
//!
//! The server is stateless: the client owns its
//! [`StorySession`](storyloom_core::StorySession) and commits returned
//! scenes itself, so a failed generation never mutates anything.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;

pub use api::{ApiState, ErrorBody, NextRequest, StartRequest, create_router};
pub use config::ServerConfig;
