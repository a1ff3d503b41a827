use serde::{Deserialize, Serialize};

use crate::Message;

/// A request to be sent to the model provider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelRequest {
    /// The full transcript, including any system message.
    pub messages: Vec<Message>,
    /// Sampling options.
    pub options: ModelOptions,
}

/// Sampling options for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Sampling temperature. `None` leaves the provider's default.
    pub temperature: Option<f32>,
}

impl ModelOptions {
    /// Returns `true` if no option is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
    }
}

/// A complete reply from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelReply {
    /// The generated text.
    pub content: String,
}
