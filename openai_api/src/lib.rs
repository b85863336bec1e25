//! A client for OpenAI's chat completions API.
//!
//! This crate provides an `OpenAIHandler` struct implementing
//! `text_completion::CompletionHandler`, so the front-end never sees the
//! provider's wire format.

mod models;
mod run_completion;
pub use run_completion::run_completion;

use async_trait::async_trait;
use std::time::Duration;
use text_completion::{CompletionError, CompletionHandler, CompletionRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Cheap to clone, the inner `reqwest::Client` is a shared pool.
#[derive(Clone)]
pub struct OpenAIHandler {
    api_key: String,
    config: ChatConfig,
    client: reqwest::Client,
}

impl OpenAIHandler {
    pub fn new(api_key: impl Into<String>, config: ChatConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;
        Ok(OpenAIHandler {
            api_key: api_key.into(),
            config,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(self.url(path))
            .header(http::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await
    }
}

#[async_trait]
impl CompletionHandler for OpenAIHandler {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        run_completion(self, request).await
    }
}
