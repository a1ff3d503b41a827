//! A model provider for Ollama-compatible chat APIs.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use crease_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use mime::Mime;
use reqwest::{Client, StatusCode, header};

pub use config::{DEFAULT_BASE_URL, OllamaConfig, OllamaConfigBuilder};
use proto::{ChatResponse, ErrorBody};

/// Error type for [`OllamaProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() || err.is_timeout() {
            ErrorKind::Unavailable
        } else {
            ErrorKind::Other
        };
        Self::new(format!("{err}"), kind)
    }

    fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let kind = if status == StatusCode::TOO_MANY_REQUESTS {
            ErrorKind::RateLimitExceeded
        } else {
            ErrorKind::Other
        };
        // Ollama reports failures as `{"error": "..."}`.
        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(body) => format!("{status}: {}", body.error),
            Err(_) => format!("{status}"),
        };
        Self::new(message, kind)
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Ollama-compatible model provider.
///
/// Requests are sent without streaming, and no timeout is applied other
/// than what the server itself enforces.
#[derive(Clone, Debug)]
pub struct OllamaProvider {
    client: Client,
    config: Arc<OllamaConfig>,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider` with the given configuration.
    #[inline]
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Returns the configuration of this provider.
    #[inline]
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

impl ModelProvider for OllamaProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        let chat_req = proto::create_request(req, &self.config);
        debug!(
            model = self.config.model.as_str(),
            messages = req.messages.len(),
            "sending chat request"
        );
        let resp_fut = self
            .client
            .post(self.config.chat_url())
            .header(header::ACCEPT, "application/json")
            .json(&chat_req)
            .send();

        async move {
            let resp = resp_fut.await.map_err(Error::from_transport)?;
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned);
            let body = resp.bytes().await.map_err(Error::from_transport)?;
            trace!("got response: {status}, {} bytes", body.len());

            if !status.is_success() {
                return Err(Error::from_status(status, &body));
            }

            let is_json = content_type
                .as_deref()
                .and_then(|v| v.parse().ok())
                .map(|m: Mime| m.subtype().as_str() == "json")
                .unwrap_or(false);
            if !is_json {
                return Err(Error::new(
                    format!("Unexpected content type: {content_type:?}"),
                    ErrorKind::InvalidResponse,
                ));
            }

            decode_reply(&body)
        }
    }
}

fn decode_reply(body: &[u8]) -> Result<ModelReply, Error> {
    let resp =
        serde_json::from_slice::<ChatResponse>(body).map_err(|err| {
            Error::new(format!("{err}"), ErrorKind::InvalidResponse)
        })?;
    if let Some(error) = resp.error {
        return Err(Error::new(error, ErrorKind::InvalidResponse));
    }
    if !resp.done {
        warn!("got a reply that is not marked as done");
    }
    let Some(message) = resp.message else {
        return Err(Error::new("missing message", ErrorKind::InvalidResponse));
    };
    Ok(ModelReply {
        content: message.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reply() {
        let reply =
            decode_reply(include_bytes!("../fixtures/chat_response.json"))
                .unwrap();
        assert_eq!(reply.content, "Short ball leg trap.");
    }

    #[test]
    fn test_decode_invalid_reply() {
        let err = decode_reply(br#"{"done": true}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
        assert_eq!(err.message(), "missing message");

        let err = decode_reply(br#"{"error": "model is loading"}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
        assert_eq!(err.message(), "model is loading");

        let err = decode_reply(b"<html></html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[test]
    fn test_status_errors() {
        let err = Error::from_status(
            StatusCode::NOT_FOUND,
            br#"{"error": "model 'gemma3:4b' not found"}"#,
        );
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(
            err.message(),
            "404 Not Found: model 'gemma3:4b' not found"
        );

        let err = Error::from_status(StatusCode::TOO_MANY_REQUESTS, b"");
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
        assert_eq!(err.message(), "429 Too Many Requests");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let config = OllamaConfigBuilder::with_model("gemma3:4b")
            .with_base_url("http://127.0.0.1:9")
            .build();
        let provider = OllamaProvider::new(config);
        let err = provider
            .send_request(&ModelRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }
}
