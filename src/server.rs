//! HTTP surface: `POST /query` runs the pipeline, `GET /` reports liveness.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::detect::LanguageDetector;
use crate::pipeline::{Pipeline, PipelineResult, Query};
use crate::translate::TranslationClient;

pub fn router<D, C>(pipeline: Arc<Pipeline<D, C>>, allowed_origins: Vec<HeaderValue>) -> Router
where
    D: LanguageDetector + Send + Sync + 'static,
    C: TranslationClient + Send + Sync + 'static,
{
    // Credentialed CORS forbids wildcards, so methods and headers are mirrored.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(status))
        .route("/query", post(handle_query::<D, C>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pipeline)
}

pub async fn serve(addr: SocketAddr, app: Router) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn status() -> Json<Value> {
    Json(json!({ "message": "Backend is running!" }))
}

async fn handle_query<D, C>(
    State(pipeline): State<Arc<Pipeline<D, C>>>,
    Json(query): Json<Query>,
) -> Json<PipelineResult>
where
    D: LanguageDetector + Send + Sync + 'static,
    C: TranslationClient + Send + Sync + 'static,
{
    Json(pipeline.handle(&query).await)
}
