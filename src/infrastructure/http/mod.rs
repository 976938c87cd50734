use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::{
    controllers::{health, video::VideoController},
    infrastructure::auth::{auth_middleware, request_id_middleware},
};

/// Build the application router. Exposed separately from the server
/// start so integration tests can run it in-process.
pub fn build_router(config: Arc<Config>, video_controller: Arc<VideoController>) -> Router {
    // Video generation route (needs the worker secret)
    let video_routes = Router::new()
        .route("/generate-video", post(VideoController::generate_video))
        .with_state(video_controller)
        .layer(middleware::from_fn_with_state(
            config.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(video_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    video_controller: Arc<VideoController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), video_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
