use crease_model::{Message, ModelOptions, ModelProvider};

use super::ChatSession;
use crate::conversation::Conversation;
use crate::model_client::ModelClient;
use crate::reply::ReplyPolicy;

/// [`ChatSession`] builder.
pub struct ChatSessionBuilder {
    model_client: Option<ModelClient>,
    system_prompt: Option<String>,
    options: ModelOptions,
    reply_policy: ReplyPolicy,
}

impl ChatSessionBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self::with_model_client(Some(ModelClient::new(provider)))
    }

    /// Creates a new builder without a model backend.
    ///
    /// Sessions built this way can only answer with the fallback reply.
    #[inline]
    pub fn offline() -> Self {
        Self::with_model_client(None)
    }

    fn with_model_client(model_client: Option<ModelClient>) -> Self {
        Self {
            model_client,
            system_prompt: None,
            options: ModelOptions::default(),
            reply_policy: ReplyPolicy::default(),
        }
    }

    /// Sets the system prompt, which seeds the conversation.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the sampling temperature.
    #[inline]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    /// Cuts every reply to its first `limit` words.
    #[inline]
    pub fn with_word_limit(mut self, limit: usize) -> Self {
        self.reply_policy.word_limit = Some(limit);
        self
    }

    /// Sets the reply used when there is no model backend.
    #[inline]
    pub fn with_fallback_reply<S: Into<String>>(mut self, reply: S) -> Self {
        self.reply_policy.fallback = Some(reply.into());
        self
    }

    /// Builds the session.
    pub fn build(self) -> ChatSession {
        let Self {
            model_client,
            system_prompt,
            options,
            reply_policy,
        } = self;

        let conversation = match system_prompt {
            Some(prompt) => Conversation::with_seed(Message::system(prompt)),
            None => Conversation::new(),
        };
        debug!(
            online = model_client.is_some(),
            seeded = conversation.seed().is_some(),
            "chat session created"
        );

        ChatSession {
            model_client,
            conversation,
            options,
            reply_policy,
        }
    }
}
