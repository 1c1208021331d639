#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::{get, post},
};
use serde_json::Value;
use spg_sdk::Navigator;
use tokio::{net::TcpListener, sync::Notify};

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Object the mock store answers with for one key.
#[derive(Clone)]
pub enum MockObject {
    Text(String),
    Status(StatusCode),
}

#[derive(Clone, Default)]
struct StoreState {
    objects: Arc<HashMap<String, MockObject>>,
    requests: Arc<Mutex<Vec<(Method, String)>>>,
}

/// In-process object store serving `/{key}`.
pub struct MockStore {
    pub base_url: String,
    requests: Arc<Mutex<Vec<(Method, String)>>>,
}

async fn object(
    State(state): State<StoreState>,
    method: Method,
    Path(key): Path<String>,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push((method, key.clone()));
    match state.objects.get(&key) {
        Some(MockObject::Text(body)) => (StatusCode::OK, body.clone()),
        Some(MockObject::Status(status)) => (*status, String::new()),
        None => (StatusCode::NOT_FOUND, String::from("NoSuchKey")),
    }
}

impl MockStore {
    pub async fn start<I, K>(objects: I) -> Self
    where
        I: IntoIterator<Item = (K, MockObject)>,
        K: Into<String>,
    {
        let state = StoreState {
            objects: Arc::new(
                objects
                    .into_iter()
                    .map(|(key, object)| (key.into(), object))
                    .collect(),
            ),
            requests: Arc::default(),
        };
        let requests = state.requests.clone();
        let app = Router::new()
            .route("/{*key}", get(object))
            .with_state(state);
        Self {
            base_url: serve(app).await,
            requests,
        }
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn text(body: &str) -> MockObject {
    MockObject::Text(body.to_string())
}

/// Holds the compile endpoint's answer until the test releases it.
#[derive(Default)]
pub struct Gate {
    received: Notify,
    release: Notify,
}

impl Gate {
    pub async fn wait_for_request(&self) {
        self.received.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[derive(Clone)]
struct CompilerState {
    status: StatusCode,
    response: Value,
    bodies: Arc<Mutex<Vec<Value>>>,
    gate: Option<Arc<Gate>>,
}

/// In-process compile endpoint serving `POST /persist`.
pub struct MockCompiler {
    pub base_url: String,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn persist(
    State(state): State<CompilerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.bodies.lock().unwrap().push(body);
    if let Some(gate) = &state.gate {
        gate.received.notify_one();
        gate.release.notified().await;
    }
    (state.status, Json(state.response.clone()))
}

impl MockCompiler {
    pub async fn start(status: StatusCode, response: Value) -> Self {
        Self::start_gated(status, response, None).await
    }

    pub async fn start_gated(status: StatusCode, response: Value, gate: Option<Arc<Gate>>) -> Self {
        let state = CompilerState {
            status,
            response,
            bodies: Arc::default(),
            gate,
        };
        let bodies = state.bodies.clone();
        let app = Router::new()
            .route("/persist", post(persist))
            .with_state(state);
        Self {
            base_url: serve(app).await,
            bodies,
        }
    }

    /// JSON bodies received so far.
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Navigator that remembers every location it was sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.locations.lock().unwrap().push(location.to_string());
    }
}

/// Address nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";
