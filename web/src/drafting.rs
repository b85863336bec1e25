//! Form fields to prompt, prompt to draft, draft to storage.

use draft_store::{DraftArchive, DraftRecord, StoreError};
use serde::Deserialize;
use text_completion::{CompletionError, CompletionHandler, CompletionRequest};
use tracing::*;

use crate::AppState;

pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that generates professional emails.";
pub const MAX_TOKENS: u32 = 200;
pub const TEMPERATURE: f32 = 0.7;

/// Stands in for a field the form did not send.
pub const ABSENT: &str = "None";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DraftRequest {
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub details: Option<String>,
}

/// The cause is part of the message shown to the user, so it is not also
/// exposed as `source()`.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Error generating email: {0}")]
    Generation(CompletionError),
    #[error("Error saving email: {0}")]
    Save(StoreError),
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}

pub fn build_prompt(req: &DraftRequest) -> String {
    format!(
        "Generate an email for the following: Purpose: {}, Tone: {}, Additional Details: {}",
        field(&req.purpose),
        field(&req.tone),
        field(&req.details)
    )
}

pub fn completion_request(req: &DraftRequest) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_INSTRUCTION.to_string(),
        prompt: build_prompt(req),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

pub async fn generate(
    handler: &(dyn CompletionHandler + Send + Sync),
    req: &DraftRequest,
) -> Result<DraftRecord, DraftError> {
    let completion = completion_request(req);
    debug!("generate prompt={}", completion.prompt);

    let text = handler.complete(&completion).await.map_err(|e| {
        warn!("completion failed: {}", e);
        DraftError::Generation(e)
    })?;

    Ok(DraftRecord {
        purpose: req.purpose.clone(),
        tone: req.tone.clone(),
        details: req.details.clone(),
        draft: text.trim().to_string(),
    })
}

pub async fn submit(
    archive: &(dyn DraftArchive + Send + Sync),
    record: &DraftRecord,
) -> Result<(), DraftError> {
    archive.save(record).await.map_err(|e| {
        warn!("saving draft failed: {}", e);
        DraftError::Save(e)
    })
}

/// Generates a draft and, when an archive is configured, stores it.
/// A storage failure discards the draft.
pub async fn generate_and_submit(
    state: &AppState,
    req: &DraftRequest,
) -> Result<DraftRecord, DraftError> {
    let record = generate(state.completion.as_ref(), req).await?;
    if let Some(archive) = &state.archive {
        submit(archive.as_ref(), &record).await?;
    }
    Ok(record)
}
