pub mod errors;
pub mod id;
pub mod prompts;

pub use errors::{ConfigError, ToolLmError};
pub use id::{new_correlation_id, SessionId};
pub use prompts::{DEFAULT_FALLBACK_MESSAGE, DEFAULT_SYSTEM_PROMPT};
