//! Narrative generation providers for Storyloom.
//!
//! Two interchangeable [`Storyteller`](storyloom_interface::Storyteller)
//! implementations live here:
//!
//! - [`MockStoryteller`]: deterministic local scenes after a fixed
//!   artificial delay, no network dependency.
//! - [`GroqStoryteller`]: delegates to the Groq LPU inference API through
//!   an OpenAI-compatible chat-completions client, requesting structured
//!   JSON replies.
//!
//! The prompt-construction, forced-ending, and sanitation rules are shared
//! so behavior is uniform regardless of which provider is active. Selection
//! happens through [`create_storyteller`] from process configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod factory;
mod groq;
mod mock;
mod parse;
mod prompt;
mod sanitize;
mod wire;

pub use client::ChatClient;
pub use factory::{ProviderConfig, create_storyteller};
pub use groq::GroqStoryteller;
pub use mock::MockStoryteller;
pub use parse::{RawSceneReply, extract_json, scene_from_reply};
pub use prompt::{continuation_prompt, opening_prompt, resolve_action};
pub use sanitize::Sanitizer;
pub use wire::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat, Usage,
};

/// Default Groq model used when no override is configured.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// A story always runs exactly this many scenes; the last is forced to end.
pub const FINAL_SCENE_POSITION: usize = 3;
