use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Serialize, Debug)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChoiceMessage {
    //null when the model answered with a tool call only
    #[serde(default)]
    pub content: Option<String>,
}

/// `{"error": {"message": "...", "type": "..."}}` returned with non-2xx statuses.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorDetail {
    pub message: String,
}
