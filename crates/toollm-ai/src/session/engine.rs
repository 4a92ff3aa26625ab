//! The tool-call loop.

use std::sync::Arc;

use tokio::sync::Mutex;
use toollm_common::{SessionId, DEFAULT_FALLBACK_MESSAGE, DEFAULT_SYSTEM_PROMPT};
use tracing::{debug, warn};

use crate::search::{join_results, SearchProvider};
use crate::token_tracker::{TokenTracker, UsageSnapshot};
use crate::tools::{builtin_tools, parse_query, WEB_SEARCH};
use crate::{AiClient, AiError, Message, ToolCall, ToolDefinition};

use super::cache::SessionCache;

/// Knobs for `ChatEngine`.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// First message of every new conversation.
    pub system_prompt: String,
    /// Completion calls past the first that may be spent on tool rounds.
    pub max_tool_rounds: u32,
    pub fallback_message: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tool_rounds: 5,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Mediates between the model and the search tool for each chat turn.
pub struct ChatEngine {
    client: Arc<dyn AiClient>,
    search: Arc<dyn SearchProvider>,
    sessions: SessionCache,
    tools: Vec<ToolDefinition>,
    settings: EngineSettings,
    tracker: Mutex<TokenTracker>,
}

impl ChatEngine {
    pub fn new(
        client: Arc<dyn AiClient>,
        search: Arc<dyn SearchProvider>,
        sessions: SessionCache,
        settings: EngineSettings,
    ) -> Self {
        Self {
            client,
            search,
            sessions,
            tools: builtin_tools(),
            settings,
            tracker: Mutex::new(TokenTracker::new()),
        }
    }

    pub fn sessions(&self) -> &SessionCache {
        &self.sessions
    }

    pub async fn token_usage(&self) -> UsageSnapshot {
        self.tracker.lock().await.snapshot()
    }

    /// Add `user_message` to the session's history and run the tool-call
    /// loop until the model answers without requesting a tool.
    ///
    /// The history is written back only when the model produced a final
    /// answer. Hitting the round ceiling returns the fallback message and
    /// leaves the stored history untouched, as does any error.
    pub async fn generate(
        &self,
        user_message: &str,
        session_id: &SessionId,
    ) -> Result<String, AiError> {
        let mut messages = match self.sessions.get(session_id).await {
            Some(history) => history,
            None => vec![Message::system(self.settings.system_prompt.as_str())],
        };
        messages.push(Message::user(user_message));

        let mut rounds = 0;
        loop {
            if rounds > self.settings.max_tool_rounds {
                debug!(session = %session_id, rounds, "Max tool rounds reached");
                return Ok(self.settings.fallback_message.clone());
            }
            rounds += 1;

            let response = self.client.send_message(&messages, &self.tools).await?;
            self.tracker
                .lock()
                .await
                .record(self.client.name(), &response.usage);

            messages.push(Message::assistant(
                response.content.as_str(),
                response.tool_calls.clone(),
            ));

            if response.tool_calls.is_empty() {
                self.sessions.set(session_id.clone(), messages).await;
                return Ok(response.content);
            }

            for tool_call in &response.tool_calls {
                let result = self.execute_tool(tool_call).await?;
                messages.push(Message::tool_result(tool_call, result));
            }
        }
    }

    /// Run one tool call. Bad arguments and unknown tools become the tool's
    /// result text so the model can correct itself; search failures are
    /// returned as errors.
    async fn execute_tool(&self, tool_call: &ToolCall) -> Result<String, AiError> {
        debug!(tool = %tool_call.name, id = %tool_call.id, "Executing tool");

        if tool_call.name != WEB_SEARCH {
            warn!(tool = %tool_call.name, "Model requested unknown tool");
            return Ok(format!("Error: unknown tool '{}'", tool_call.name));
        }

        let query = match parse_query(&tool_call.arguments) {
            Ok(query) => query,
            Err(e) => return Ok(format!("Error: {e}")),
        };

        let results = self.search.search(&query).await?;
        self.tracker.lock().await.record_search();
        Ok(join_results(&results))
    }
}
