//! Configuration schema types for ToolLM.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! API keys are not part of the file; they come from the environment.

mod chat;
mod llm;
mod logging;
mod search;
mod server;
mod session;

pub use chat::*;
pub use llm::*;
pub use logging::*;
pub use search::*;
pub use server::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the ToolLM service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolLmConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    pub session: SessionConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
