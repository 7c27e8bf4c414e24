use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::config::FlydaddyConfig;

/// Full application router: API nest, permissive CORS and the static
/// frontend bundle as the fallback.
pub fn app(config: &FlydaddyConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(cors)
}

pub async fn run(config: &FlydaddyConfig, state: AppState) -> Result<()> {
    let router = app(config, state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
