use std::pin::Pin;
use std::sync::Arc;

use crease_model::{
    ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use tracing::Instrument;

type SendRequestResult = Result<ModelReply, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(&ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased
/// interface for the other modules.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
}

impl ModelClient {
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(
            move |req: &ModelRequest| -> BoxedSendRequestFuture {
                let messages = req.messages.len();
                let fut = provider.send_request(req);
                Box::pin(
                    async move {
                        trace!("sent a request with {messages} messages");
                        match fut.await {
                            Ok(reply) => {
                                trace!("got a reply: {:?}", reply.content);
                                Ok(reply)
                            }
                            Err(err) => {
                                error!("got an error: {err:?}");
                                let err: Box<dyn ModelProviderError> =
                                    Box::new(err);
                                Err(err)
                            }
                        }
                    }
                    .instrument(trace_span!("model client req")),
                )
            },
        );
        Self { handler_fn }
    }

    /// Sends a request and waits for the complete reply.
    #[inline]
    pub async fn send_request(
        &self,
        req: &ModelRequest,
    ) -> Result<ModelReply, Box<dyn ModelProviderError>> {
        (self.handler_fn)(req).await
    }
}

#[cfg(test)]
mod tests {
    use crease_model::{ErrorKind, Message, ModelOptions};
    use crease_test_model::{PresetReply, TestModelProvider};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let mut model_provider = TestModelProvider::default();
        model_provider.add_reply(PresetReply::with_content("How are you?"));

        let model_client = ModelClient::new(model_provider.clone());

        for _ in 0..3 {
            let reply = model_client
                .send_request(&ModelRequest {
                    messages: vec![Message::user("Hi")],
                    options: ModelOptions::default(),
                })
                .await
                .unwrap();
            assert_eq!(reply.content, "How are you?");
        }
        assert_eq!(model_provider.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_error_handling() {
        let model_provider = TestModelProvider::default();
        let model_client = ModelClient::new(model_provider);
        let err = model_client
            .send_request(&ModelRequest {
                messages: vec![Message::user("Hi")],
                options: ModelOptions::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
