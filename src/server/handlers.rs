use super::types::{ApiError, GenerateResponse, GenerationRequest, RawGenerateRequest};
use crate::{
    image::{ImageGenerator, build_image_prompt},
    text::TextGenerator,
};
use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    response::Json,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub text: Arc<dyn TextGenerator>,
    pub image: Arc<dyn ImageGenerator>,
}

/// `POST /generate`: text first, then the image. Any failure aborts the
/// whole request and nothing computed so far is returned.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let peer = peer.map(|ConnectInfo(addr)| addr.to_string());
    let peer = peer.as_deref().unwrap_or("unknown");
    info!("/generate from={}", peer);

    let raw = RawGenerateRequest::from_body(&body);
    let had_history = raw.has_history();
    let request = GenerationRequest::from(raw);

    info!("Prompt received: {:?}", request.prompt);

    let text = state
        .text
        .generate_text(&request.prompt)
        .await
        .map_err(|e| {
            error!("Text generation failed: {}", e);
            ApiError::UpstreamText(e)
        })?;

    let image_prompt =
        build_image_prompt(&request.prompt, request.include_map, &request.country);

    let image = state
        .image
        .generate_image(&image_prompt)
        .await
        .map_err(|e| {
            error!("Image generation failed: {}", e);
            ApiError::UpstreamImage(e)
        })?;

    info!(
        "Generated response text_chars={} image_bytes={}",
        text.chars().count(),
        image.len()
    );
    if had_history {
        info!("History received and dropped for request from={}", peer);
    }

    Ok(Json(GenerateResponse::new(text, &image)))
}

/// Any method other than POST on `/generate`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
