//! Conversation sessions.
//!
//! `SessionCache` keeps each conversation's message history in memory for
//! a fixed time-to-live; `ChatEngine` runs the tool-call loop against it.

mod cache;
mod engine;


pub use cache::SessionCache;
pub use engine::{ChatEngine, EngineSettings};
