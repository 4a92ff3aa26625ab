//! Groq chat-completion client.
//!
//! Implements the `AiClient` trait over Groq's OpenAI-compatible
//! chat-completions API (https://api.groq.com/openai/v1/chat/completions).
//! Any other OpenAI-compatible endpoint works by changing the base URL.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::GroqClient;
pub use config::GroqConfig;
