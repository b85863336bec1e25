//! An interface for handling text completion requests
//!
//! This crate provides a `CompletionHandler` trait so the web front-end does
//! not depend on a specific provider. The provider is injected at startup.

use async_trait::async_trait;

/// One completion call: a system instruction, a user prompt and the sampling knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Network failure, timeout, or a body that could not be decoded.
    #[error("{0}")]
    Transport(String),
    /// The provider answered with a non-success status.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },
    /// The provider answered 2xx but without any usable completion.
    #[error("no completion in response")]
    Empty,
}

#[async_trait]
pub trait CompletionHandler {
    /// Returns the text of the first completion, untrimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
