// src/state.rs

use std::sync::Arc;

use anyhow::Result;

use crate::config::VivaConfig;
use crate::llm::{ClientConfig, CompletionProvider, OpenAIClient};
use crate::relay::ChatRelay;

#[derive(Clone)]
pub struct AppState {
    // -------- Relay Core --------
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    /// Assemble the production state: config -> OpenAI client -> relay.
    pub fn from_config(config: &VivaConfig) -> Result<Self> {
        let client = OpenAIClient::new(ClientConfig::from_app(config))?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    /// Assemble with an explicit completion provider. Tests inject their
    /// doubles through here.
    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            relay: Arc::new(ChatRelay::new(provider)),
        }
    }
}
