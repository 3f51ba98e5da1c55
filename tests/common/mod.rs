#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    routing::post,
};
use music_chat_relay::config::RelayConfig;
use serde_json::{Value, json};

/// What the fake upstream answers with.
#[derive(Clone)]
pub enum Upstream {
    Reply(Value),
    Status(StatusCode, Value),
    RawBody(&'static str),
    Slow(Duration),
}

/// One request the fake upstream received: key header, raw query and JSON body.
#[derive(Clone, Debug)]
pub struct Captured {
    pub key: Option<String>,
    pub query: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    behaviour: Upstream,
    seen: Arc<Mutex<Vec<Captured>>>,
}

pub struct MockUpstream {
    pub base: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub fn captured(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }

    pub fn config(&self) -> RelayConfig {
        RelayConfig::new("test-key", self.base.clone()).with_timeout(Duration::from_millis(500))
    }
}

pub fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }
        ]
    })
}

pub async fn spawn_upstream(behaviour: Upstream) -> MockUpstream {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        behaviour,
        seen: seen.clone(),
    };

    let app = Router::new()
        .route("/models/{action}", post(generate))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base: format!("http://{addr}"),
        seen,
    }
}

async fn generate(
    State(state): State<MockState>,
    headers: HeaderMap,
    uri: Uri,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let query = uri.query().map(str::to_string);
    state.seen.lock().unwrap().push(Captured { key, query, body });

    match state.behaviour {
        Upstream::Reply(value) => (StatusCode::OK, value.to_string()),
        Upstream::Status(status, value) => (status, value.to_string()),
        Upstream::RawBody(raw) => (StatusCode::OK, raw.to_string()),
        Upstream::Slow(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, text_reply("too late").to_string())
        }
    }
}

/// A base URL nothing is listening on.
pub async fn dead_upstream_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
