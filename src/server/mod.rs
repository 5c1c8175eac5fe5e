mod handlers;
mod types;

pub use handlers::{AppState, generate, method_not_allowed};
pub use types::*;

use crate::{
    Result,
    config::Config,
    image::HuggingFaceImageGenerator,
    text::GroqTextGenerator,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Builds the application: `/generate` plus static files for every other path.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/generate",
            post(handlers::generate).fallback(handlers::method_not_allowed),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn credential_state(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "missing, fallback mode"
    }
}

pub async fn run(config: Config) -> Result<()> {
    let timeout = Duration::from_secs(config.server.upstream_timeout_secs);

    let text = GroqTextGenerator::new(config.text.clone(), timeout)?;
    let image = HuggingFaceImageGenerator::new(config.image.clone(), timeout)?;

    info!(
        "Text model={} (api key {})",
        text.model(),
        credential_state(config.text.api_key.is_some())
    );
    info!(
        "Image model={} (token {})",
        image.model(),
        credential_state(config.image.token.is_some())
    );

    let app_state = AppState {
        text: Arc::new(text),
        image: Arc::new(image),
    };

    let app = router(app_state, &config.server.static_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Server ready at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
