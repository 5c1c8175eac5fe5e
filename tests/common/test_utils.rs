use super::mocks::{MockImageGenerator, MockTextGenerator};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use generate_server::{
    config::{ImageApiConfig, TextApiConfig},
    image::HuggingFaceImageGenerator,
    server::{AppState, router},
    text::GroqTextGenerator,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a temporary directory for static files
pub fn create_static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("index.html"), "<h1>generador</h1>")
        .expect("Failed to write index.html");
    dir
}

/// Router backed by the given mock generators
pub fn create_mock_app(text: MockTextGenerator, image: MockImageGenerator) -> (Router, TempDir) {
    let static_dir = create_static_dir();
    let state = AppState {
        text: Arc::new(text),
        image: Arc::new(image),
    };
    (router(state, static_dir.path()), static_dir)
}

/// Router backed by the real generators with no credentials configured
pub fn create_fallback_app() -> (Router, TempDir) {
    let static_dir = create_static_dir();
    let text = GroqTextGenerator::new(TextApiConfig::default(), TEST_TIMEOUT).unwrap();
    let image = HuggingFaceImageGenerator::new(ImageApiConfig::default(), TEST_TIMEOUT).unwrap();
    let state = AppState {
        text: Arc::new(text),
        image: Arc::new(image),
    };
    (router(state, static_dir.path()), static_dir)
}

pub fn post_generate(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Port on localhost with nothing listening
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
