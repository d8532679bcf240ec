// src/llm/openai.rs

//! OpenAI chat-completions client. No SDK wrappers; just reqwest and JSON.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::VivaConfig;
use crate::llm::{CompletionProvider, CompletionRequest};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String, // default "https://api.openai.com/v1", overridable
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build from application config. A missing credential is tolerated
    /// here; the request fails at call time instead.
    pub fn from_app(config: &VivaConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone().unwrap_or_default(),
            base_url: config.openai_base_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.openai_timeout),
        }
    }

    /// Create configuration with custom values (for testing)
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url,
            model,
            timeout,
        }
    }
}

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAIClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn auth_header(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.config.api_key))
    }
}

#[async_trait]
impl CompletionProvider for OpenAIClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = json!({
            "model": self.config.model,
            "messages": request.messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let resp = self
            .client
            .post(&url)
            .header(self.auth_header().0, self.auth_header().1.clone())
            .json(&body)
            .send()
            .await
            .context("Failed to send chat completion request")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI chat completion failed ({}): {}", status, error_text));
        }

        let resp_json: Value = resp.json().await.context("Failed to parse response")?;

        // Zero choices or a non-string content field is a provider failure,
        // not an empty reply.
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("No content in OpenAI chat response"))?;

        Ok(content.to_string())
    }
}
