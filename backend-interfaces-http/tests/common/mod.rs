//! Shared helpers for HTTP integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use backend_application::{AppState, Metrics};
use backend_domain::ports::{EventSink, HealthCheckService};
use backend_domain::{PersistenceError, RuntimeConfig};
use backend_interfaces_http::build_router;

/// Event sink that records every payload it is handed.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<String>>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl RecordingSink {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn persist(&self, payload_json: &str) -> Result<(), PersistenceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push(payload_json.to_string());
        match &self.failure {
            Some(message) => Err(PersistenceError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        match &self.failure {
            Some(message) => Err(PersistenceError::new(message.clone())),
            None => Ok(()),
        }
    }
}

struct SinkHealth(Arc<RecordingSink>);

#[async_trait]
impl HealthCheckService for SinkHealth {
    async fn check_database(&self) -> Result<(), PersistenceError> {
        self.0.ping().await
    }
}

pub fn build_test_app(sink: Arc<RecordingSink>) -> Router {
    build_test_app_with_limit(sink, 1024 * 1024)
}

pub fn build_test_app_with_limit(sink: Arc<RecordingSink>, max_body_bytes: u64) -> Router {
    let state = AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            max_body_bytes,
            request_timeout_seconds: 5,
        },
        event_sink: sink.clone(),
        health_service: Arc::new(SinkHealth(sink)),
        metrics: Arc::new(Metrics::default()),
    };
    build_router(state)
}

/// POST a raw body to the webhook endpoint and return status plus JSON body.
pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
