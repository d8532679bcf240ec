// src/relay/mod.rs
// Single-turn chat relay: a transcribed utterance plus a resolved persona
// becomes one completion request; the reply (or failure) maps back to a
// stable shape. No history, no retries.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::llm::{ChatMessage, CompletionProvider, CompletionRequest};
use crate::persona::Persona;

/// Output cap per reply, in completion tokens. Spoken replies stay short.
const MAX_COMPLETION_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.6;

/// System prompt used when the client supplied no persona (or an empty one).
pub const FALLBACK_SYSTEM_PROMPT: &str = "You are a friendly, concise voice assistant that answers as the candidate would respond. Keep answers 1-3 sentences unless asked to expand. Use an encouraging tone and avoid jargon.";

#[derive(Debug, Error)]
pub enum RelayError {
    /// Malformed client input; never reaches the provider.
    #[error("{0}")]
    Validation(String),
    /// The completion capability failed or returned an unusable result.
    #[error("completion provider failed: {0}")]
    Provider(String),
}

pub struct ChatRelay {
    provider: Arc<dyn CompletionProvider>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        info!("Initializing ChatRelay (provider={})", provider.name());
        Self { provider }
    }

    /// Relay one utterance. Exactly one outbound call per invocation;
    /// failures propagate once, immediately.
    ///
    /// Callers validate the message at the HTTP boundary; the guard here
    /// covers direct library use.
    pub async fn complete(
        &self,
        message: &str,
        persona: Option<&Persona>,
    ) -> Result<String, RelayError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RelayError::Validation("message is required".to_string()));
        }

        // Empty persona.system is equivalent to no persona at all.
        let system = persona
            .map(|p| p.system.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_SYSTEM_PROMPT);

        let request = CompletionRequest {
            messages: vec![ChatMessage::system(system), ChatMessage::user(message)],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        match self.provider.complete(request).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(err) => {
                error!("{} completion failed: {:#}", self.provider.name(), err);
                Err(RelayError::Provider(err.to_string()))
            }
        }
    }
}
