//! A local fake model for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crease_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
    Role,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<PresetFailure> for Error {
    fn from(failure: PresetFailure) -> Self {
        let kind = match failure {
            PresetFailure::Unavailable => ErrorKind::Unavailable,
            PresetFailure::RateLimitExceeded => ErrorKind::RateLimitExceeded,
            PresetFailure::InvalidResponse => ErrorKind::InvalidResponse,
        };
        Self {
            message: "preset failure",
            kind,
        }
    }
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the conversation script, which
/// is how the model should reply to each user turn. The reply is selected by
/// the number of user messages in the request, so the first user message is
/// answered by the first preset, and so on. If there are no enough replies in
/// the script, an error will be returned.
///
/// Every request is recorded and can be inspected with
/// [`TestModelProvider::requests`]. Clones share the same record.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Vec<PresetReply>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<ModelRequest>>>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_reply(&mut self, preset: PresetReply) {
        self.script.push(preset);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn select_reply(&self, req: &ModelRequest) -> Result<ModelReply, Error> {
        let user_turns = req
            .messages
            .iter()
            .filter(|msg| msg.role() == Role::User)
            .count();
        let Some(step_idx) = user_turns.checked_sub(1) else {
            return Err(Error {
                message: "no user message in request",
                kind: ErrorKind::InvalidResponse,
            });
        };
        let Some(preset) = self.script.get(step_idx) else {
            return Err(Error {
                message: "no enough steps",
                kind: ErrorKind::Other,
            });
        };
        if let Some(failure) = preset.failure {
            return Err(failure.into());
        }
        Ok(ModelReply {
            content: preset.content.clone(),
        })
    }
}

impl Debug for TestModelProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestModelProvider")
            .field("script", &self.script)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }
        let result = self.select_reply(req);
        let delay = self.delay;
        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use crease_model::{Message, ModelOptions};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let mut provider = TestModelProvider::default();
        provider.add_reply(PresetReply::with_content("Hello, world!"));
        provider.add_reply(PresetReply::with_content("Sure, let me look."));

        let mut req = ModelRequest {
            messages: vec![
                Message::system("Be nice."),
                Message::user("Hi"),
            ],
            options: ModelOptions::default(),
        };
        let reply = provider.send_request(&req).await.unwrap();
        assert_eq!(reply.content, "Hello, world!");

        req.messages.push(Message::assistant(reply.content));
        req.messages.push(Message::user("Check my todo"));
        let reply = provider.send_request(&req).await.unwrap();
        assert_eq!(reply.content, "Sure, let me look.");

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].messages.len(), 4);
    }

    #[tokio::test]
    async fn test_script_exhausted() {
        let provider = TestModelProvider::default();
        let req = ModelRequest {
            messages: vec![Message::user("Hi")],
            options: ModelOptions::default(),
        };
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[tokio::test]
    async fn test_preset_failure() {
        let mut provider = TestModelProvider::default();
        provider.add_reply(PresetReply::failing(PresetFailure::Unavailable));
        let req = ModelRequest {
            messages: vec![Message::user("Hi")],
            options: ModelOptions::default(),
        };
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }
}
