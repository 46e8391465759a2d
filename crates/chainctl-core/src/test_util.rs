//! Shared test helpers for `chainctl-core` unit tests.
//!
//! [`MockNode`] is a real JSON-RPC server on an ephemeral loopback port. It
//! answers from canned per-method replies and records every request body it
//! receives, so tests can assert both what was sent and how the reply was
//! decoded.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::config::NodeConfig;

#[derive(Clone)]
enum Reply {
    Result(Value),
    Error(Value),
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, Reply>>,
    raw_body: Option<Arc<str>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

pub struct MockNodeBuilder {
    replies: HashMap<String, Reply>,
    raw_body: Option<Arc<str>>,
}

impl MockNodeBuilder {
    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.replies.insert(method.to_owned(), Reply::Result(result));
        self
    }

    pub fn with_error(mut self, method: &str, code: i64, message: &str) -> Self {
        self.replies.insert(
            method.to_owned(),
            Reply::Error(json!({"code": code, "message": message})),
        );
        self
    }

    /// Answer every request with `body` verbatim instead of a JSON-RPC envelope.
    pub fn with_raw_body(mut self, body: &str) -> Self {
        self.raw_body = Some(Arc::from(body));
        self
    }

    pub async fn spawn(self) -> MockNode {
        let state = MockState {
            replies: Arc::new(self.replies),
            raw_body: self.raw_body,
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock node must bind loopback");
        let addr = listener.local_addr().expect("mock node must have an address");
        let router = Router::new()
            .route("/", post(handle_rpc))
            .with_state(state.clone());
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock node server must run");
        });

        MockNode { addr, state, task }
    }
}

pub struct MockNode {
    addr: SocketAddr,
    state: MockState,
    task: JoinHandle<()>,
}

impl MockNode {
    pub fn builder() -> MockNodeBuilder {
        MockNodeBuilder {
            replies: HashMap::new(),
            raw_body: None,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> NodeConfig {
        NodeConfig::new(self.url())
    }

    /// Every request body received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.state
            .requests
            .lock()
            .expect("request log lock must not be poisoned")
            .clone()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A listener that accepts TCP connections and never sends a byte back, for
/// exercising request timeouts.
pub struct SilentNode {
    addr: SocketAddr,
    accepted: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl SilentNode {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("silent node must bind loopback");
        let addr = listener.local_addr().expect("silent node must have an address");
        let accepted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&accepted);
        let task = tokio::spawn(async move {
            // Held open so the client sees a live but mute peer.
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(stream);
            }
        });
        Self {
            addr,
            accepted,
            task,
        }
    }

    pub fn config(&self) -> NodeConfig {
        NodeConfig::new(format!("http://{}", self.addr))
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

impl Drop for SilentNode {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A loopback endpoint with nothing listening on it.
pub async fn unreachable_config() -> NodeConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("scratch listener must bind loopback");
    let addr = listener.local_addr().expect("scratch listener must have an address");
    drop(listener);
    NodeConfig::new(format!("http://{addr}"))
}

async fn handle_rpc(State(state): State<MockState>, body: String) -> Response {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .expect("request log lock must not be poisoned")
        .push(request.clone());

    if let Some(raw) = &state.raw_body {
        return ([(header::CONTENT_TYPE, "text/html")], raw.to_string()).into_response();
    }

    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or("");
    let envelope = match state.replies.get(method) {
        Some(Reply::Result(result)) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Some(Reply::Error(error)) => json!({"jsonrpc": "2.0", "id": id, "error": error}),
        None => json!({"jsonrpc": "2.0", "id": id}),
    };
    Json(envelope).into_response()
}
