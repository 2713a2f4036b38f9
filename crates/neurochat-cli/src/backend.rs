//! HttpChatBackend -- concrete [`ChatBackend`] implementation over HTTP.
//!
//! Sends `POST { "message": ..., "history": [...] }` to the configured
//! endpoint and extracts the `response` string from the reply body.
//! Transport failures and error statuses map to [`BackendError::Unreachable`];
//! anything wrong with a success body maps to [`BackendError::Unexpected`].

use serde::{Deserialize, Serialize};

use neurochat_core::backend::ChatBackend;
use neurochat_types::error::BackendError;
use neurochat_types::history::HistoryTurn;

/// Outbound request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [HistoryTurn],
}

/// Expected success body.
///
/// `response` is optional so that a well-formed JSON object lacking the
/// field surfaces as a missing-field error rather than a parse error.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

/// HTTP implementation of the chat backend port.
pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    /// Create a backend pointed at the given endpoint.
    ///
    /// The client has no request timeout: a submission stays in flight until
    /// the backend answers, and the conversation stays busy for that long.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this backend posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatBackend for HttpChatBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &str, history: &[HistoryTurn]) -> Result<String, BackendError> {
        let body = ChatRequest { message, history };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable {
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Unreachable {
                reason: format!("backend returned HTTP {status}"),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Unexpected(format!("malformed response body: {e}")))?;

        parsed.response.ok_or_else(|| {
            BackendError::Unexpected("response body missing 'response' field".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurochat_core::conversation::Conversation;
    use neurochat_types::message::Message;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> HttpChatBackend {
        HttpChatBackend::new(format!("{}/api/chat", server.uri()))
    }

    #[tokio::test]
    async fn test_success_returns_reply_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "hi there" })),
            )
            .mount(&server)
            .await;

        let reply = backend_for(&server).send("hello", &[]).await.unwrap();
        assert_eq!(reply, "hi there");
    }

    #[tokio::test]
    async fn test_request_body_carries_message_and_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({
                "message": "second",
                "history": [
                    { "role": "user", "parts": [ { "text": "first" } ] },
                    { "role": "model", "parts": [ { "text": "reply" } ] },
                ],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let history = vec![
            HistoryTurn::from_message(&Message::user("first")),
            HistoryTurn::from_message(&Message::assistant("reply")),
        ];
        backend_for(&server).send("second", &history).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = backend_for(&server).send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn test_missing_response_field_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
            .mount(&server)
            .await;

        let err = backend_for(&server).send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = backend_for(&server).send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        // Port 1 is never listening.
        let backend = HttpChatBackend::new("http://127.0.0.1:1/api/chat");
        let err = backend.send("hello", &[]).await.unwrap_err();
        assert!(matches!(err, BackendError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn test_full_turn_through_conversation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "hi there" })),
            )
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let mut conversation = Conversation::new();
        let reply = conversation.submit(&backend, "hello").await.unwrap();

        assert_eq!(reply.text, "hi there");
        assert_eq!(conversation.messages().len(), 3);
        assert!(!conversation.is_busy());
    }
}
