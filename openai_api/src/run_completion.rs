use text_completion::{CompletionError, CompletionRequest};
use tracing::*;

use crate::models::{ChatMessage, ChatRequest, ChatResponse, ErrorBody};
use crate::OpenAIHandler;

const PATH_CHAT_COMPLETIONS: &str = "chat/completions";

pub async fn run_completion(
    handler: &OpenAIHandler,
    req: &CompletionRequest,
) -> Result<String, CompletionError> {
    trace!("run_completion prompt={}", req.prompt);

    let body = ChatRequest {
        model: handler.model(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: &req.system,
            },
            ChatMessage {
                role: "user",
                content: &req.prompt,
            },
        ],
        max_tokens: req.max_tokens,
        temperature: req.temperature,
    };

    let resp = handler
        .post(PATH_CHAT_COMPLETIONS, &body)
        .await
        .map_err(transport)?;

    let status = resp.status();
    trace!("POST {} status={}", PATH_CHAT_COMPLETIONS, status);

    if !status.is_success() {
        let err_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        //Prefer the provider's message, fall back on the raw body
        let message = serde_json::from_str::<ErrorBody>(&err_text)
            .map(|b| b.error.message)
            .unwrap_or(err_text);
        warn!("run_completion failed status={} message={}", status, message);
        return Err(CompletionError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    let data: ChatResponse = resp.json().await.map_err(transport)?;
    trace!("POST {} {:?}", PATH_CHAT_COMPLETIONS, data);

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::Empty)?;

    debug!("run_completion prompt={} result={}", req.prompt, content);
    Ok(content)
}

fn transport(e: reqwest::Error) -> CompletionError {
    CompletionError::Transport(e.to_string())
}
