use crease_model::{Message, ModelOptions, ModelRequest};
use serde::{Deserialize, Serialize};

use crate::OllamaConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub message: Option<ResponseMessage>,
    pub error: Option<String>,
    #[serde(default)]
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Options>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OllamaConfig,
) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: req.messages.clone(),
        stream: false,
        options: create_options(&req.options),
    }
}

#[inline]
fn create_options(options: &ModelOptions) -> Option<Options> {
    if options.is_empty() {
        return None;
    }
    Some(Options {
        temperature: options.temperature,
    })
}
