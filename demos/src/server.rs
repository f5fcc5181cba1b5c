//! # Metadata Server
//!
//! A (naive) HTTP server publishing Service Provider metadata.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use credibil_saml::{Configuration, METADATA_CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Create the metadata router.
pub fn router(config: Configuration) -> Router {
    Router::new()
        .route("/saml/metadata", get(metadata))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

/// Serve metadata on `addr` until the process is stopped.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the listener cannot
/// be bound.
pub async fn serve(addr: &str, config: Configuration) -> Result<()> {
    // fail at startup rather than on first request
    credibil_saml::metadata(&config)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

#[axum::debug_handler]
async fn metadata(State(config): State<Arc<Configuration>>) -> Response {
    match credibil_saml::generate(&config) {
        Ok(xml) => ([(header::CONTENT_TYPE, METADATA_CONTENT_TYPE)], xml).into_response(),
        Err(e) => {
            tracing::error!("generating metadata: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_json())).into_response()
        }
    }
}
