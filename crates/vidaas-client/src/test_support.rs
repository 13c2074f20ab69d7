//! Local stand-in for the provider used by unit tests
//!
//! Binds an axum server on an ephemeral port, records every request it sees
//! and answers each one with the same scripted status and body, optionally
//! after a delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Request, StatusCode};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Copy)]
pub(crate) struct MockResponse {
    status: u16,
    body: &'static str,
    delay: Option<Duration>,
}

impl MockResponse {
    pub(crate) fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: None,
        }
    }

    pub(crate) fn ok(body: &'static str) -> Self {
        Self::new(200, body)
    }

    /// Hold the response back for `delay` before answering.
    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

pub(crate) type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start the mock provider. Returns its base URI and the request log.
pub(crate) async fn start_mock_provider(response: MockResponse) -> (String, Recorded) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded: Recorded = Arc::default();
    let sink = recorded.clone();

    let app = axum::Router::new().fallback(move |request: Request<Body>| {
        let sink = sink.clone();
        async move {
            let (parts, body) = request.into_parts();
            let bytes = axum::body::to_bytes(body, 10 * 1024 * 1024)
                .await
                .unwrap();
            sink.lock().unwrap().push(RecordedRequest {
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                query: parts.uri.query().map(str::to_string),
                headers: parts.headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
            if let Some(delay) = response.delay {
                tokio::time::sleep(delay).await;
            }
            (
                StatusCode::from_u16(response.status).unwrap(),
                [(CONTENT_TYPE, "application/json")],
                response.body,
            )
        }
    });

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), recorded)
}
