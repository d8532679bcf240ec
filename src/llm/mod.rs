// src/llm/mod.rs
// Completion provider trait and the types shared by implementations.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod openai;

pub use openai::{ClientConfig, OpenAIClient};

/// Message format for the completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A single-turn completion request as the relay builds it. The model
/// identifier lives in the provider's own configuration.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// External completion capability: given a message sequence, return
/// generated text or fail. Injected into the relay so tests can
/// substitute a double.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging and error labels
    fn name(&self) -> &'static str;

    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
