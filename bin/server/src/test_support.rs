use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use maljut_core::{
    errors::{LlmError, LlmResult},
    GenerativeClient,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::service::MaljutService;

/// Generation client double with a canned reply and a call counter.
pub struct StubClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeClient for StubClient {
    async fn generate(&self, _prompt: &str) -> LlmResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Upstream {
                message: message.clone(),
            }),
        }
    }
}

/// Build the full application around a stub client.
///
/// `reply` is either the text the stub returns or the upstream error
/// message it fails with.
pub fn stub_app(reply: Result<&str, &str>) -> (Router, Arc<StubClient>) {
    let client = Arc::new(StubClient {
        reply: reply.map(str::to_string).map_err(str::to_string),
        calls: AtomicUsize::new(0),
    });
    let service = Arc::new(MaljutService::with_client(client.clone()));
    (crate::create_app(service), client)
}

/// POST a JSON body to /api/chat
pub async fn post_chat(app: Router, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
