//! Mock TTS vendor for integration tests
//!
//! Serves both vendor wire formats from one server: `ElevenLabs` raw MP3
//! bytes and Speechify base64-in-JSON, plus the Speechify voice listing

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use base64::Engine;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Canned audio returned by every successful synthesis
pub const AUDIO: &[u8] = b"ID3\x04\x00mock-mp3-frames";

/// Mock vendor backend that records what it receives
pub struct MockVendor {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockVendorState>,
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub credential: Option<String>,
    pub body: Value,
}

struct MockVendorState {
    request_count: AtomicU32,
    /// Status returned instead of audio, if set
    failure: Option<StatusCode>,
    last_request: Mutex<Option<Recorded>>,
}

impl MockVendor {
    /// Start a mock vendor that answers every synthesis with [`AUDIO`]
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock vendor that answers every request with `status`
    pub async fn start_failing(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Some(status)).await
    }

    async fn start_inner(failure: Option<StatusCode>) -> anyhow::Result<Self> {
        let state = Arc::new(MockVendorState {
            request_count: AtomicU32::new(0),
            failure,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_elevenlabs))
            .route("/v1/audio/speech", routing::post(handle_speechify))
            .route("/v1/voices", routing::get(handle_voices))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the adapters append paths like `/audio/speech`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of requests received on any route
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Most recent request received
    pub fn last_request(&self) -> Option<Recorded> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockVendor {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl MockVendorState {
    /// Count and record a request, returning the configured failure if any
    fn record(&self, path: String, credential: Option<String>, body: Value) -> Option<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(Recorded { path, credential, body });

        self.failure
            .map(|status| (status, format!("mock failure ({})", status.as_u16())).into_response())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

async fn handle_elevenlabs(
    State(state): State<Arc<MockVendorState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let credential = header_value(&headers, "xi-api-key");
    if let Some(failure) = state.record(format!("/v1/text-to-speech/{voice_id}"), credential, body) {
        return failure;
    }

    if header_value(&headers, "accept").as_deref() != Some("audio/mpeg") {
        return (StatusCode::NOT_ACCEPTABLE, "expected Accept: audio/mpeg").into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], AUDIO).into_response()
}

async fn handle_speechify(
    State(state): State<Arc<MockVendorState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let credential = header_value(&headers, "authorization");
    if let Some(failure) = state.record("/v1/audio/speech".to_owned(), credential, body) {
        return failure;
    }

    Json(json!({
        "audio_data": base64::engine::general_purpose::STANDARD.encode(AUDIO),
        "audio_format": "mp3",
        "billable_characters_count": 11
    }))
    .into_response()
}

async fn handle_voices(State(state): State<Arc<MockVendorState>>, headers: HeaderMap) -> Response {
    let credential = header_value(&headers, "authorization");
    if let Some(failure) = state.record("/v1/voices".to_owned(), credential, Value::Null) {
        return failure;
    }

    Json(json!([
        { "id": "cliff", "display_name": "Cliff", "locale": "en-US", "gender": "male" },
        { "id": "henry", "display_name": "Henry", "locale": "en-US", "gender": "male" }
    ]))
    .into_response()
}
