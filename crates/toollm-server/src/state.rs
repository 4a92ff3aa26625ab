//! State shared by all request handlers.

use std::sync::Arc;

use toollm_ai::ChatEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    pub fn new(engine: ChatEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
