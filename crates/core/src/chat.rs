mod builder;

use std::error::Error;
use std::fmt::{self, Display};

use crease_model::{ModelOptions, ModelProviderError, ModelRequest, Role};

use crate::conversation::Conversation;
use crate::model_client::ModelClient;
use crate::reply::ReplyPolicy;
pub use builder::ChatSessionBuilder;

/// Errors returned by [`ChatSession::send_message`].
#[derive(Debug)]
pub enum ChatError {
    /// The session has no model backend and no fallback reply.
    Unavailable,
    /// The model backend failed to produce a reply.
    Model(Box<dyn ModelProviderError>),
}

impl Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Unavailable => write!(f, "no model backend available"),
            ChatError::Model(err) => write!(f, "{}: {err}", err.kind()),
        }
    }
}

impl Error for ChatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChatError::Unavailable => None,
            ChatError::Model(err) => Some(err.as_ref()),
        }
    }
}

/// A chat session, owning the transcript of one interactive session and
/// the model backend it talks to.
///
/// Each call to [`ChatSession::send_message`] is a full request/response
/// round: the user turn is appended, the whole transcript (including the
/// system seed) is submitted, and the reply is appended once it arrives.
pub struct ChatSession {
    model_client: Option<ModelClient>,
    conversation: Conversation,
    options: ModelOptions,
    reply_policy: ReplyPolicy,
}

impl ChatSession {
    /// Sends a user message and returns the assistant's reply.
    ///
    /// On failure the user turn stays in the transcript and no assistant
    /// turn is added, the session can be used again right away.
    pub async fn send_message(
        &mut self,
        text: &str,
    ) -> Result<String, ChatError> {
        self.conversation.append(Role::User, text);

        let reply = match &self.model_client {
            Some(model_client) => {
                let request = ModelRequest {
                    messages: self.conversation.messages().to_vec(),
                    options: self.options,
                };
                let reply = model_client
                    .send_request(&request)
                    .await
                    .map_err(ChatError::Model)?;
                self.reply_policy.shape(&reply.content)
            }
            None => {
                let Some(fallback) = &self.reply_policy.fallback else {
                    warn!("no model backend and no fallback reply");
                    return Err(ChatError::Unavailable);
                };
                debug!("no model backend, using the fallback reply");
                fallback.clone()
            }
        };

        self.conversation.append(Role::Assistant, reply.as_str());
        Ok(reply)
    }

    /// Returns the transcript.
    #[inline]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Drops all turns, keeping the system seed if there is one.
    #[inline]
    pub fn clear(&mut self) {
        info!("clearing {} turns", self.conversation.turn_count());
        self.conversation.clear();
    }

    /// Returns `true` if the session has a model backend.
    #[inline]
    pub fn is_online(&self) -> bool {
        self.model_client.is_some()
    }

    /// Returns the sampling options sent with every request.
    #[inline]
    pub fn options(&self) -> ModelOptions {
        self.options
    }
}
