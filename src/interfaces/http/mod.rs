//! HTTP interface.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/receipts/process` | `{"id": "..."}` |
//! | `GET`  | `/receipts/{id}/points` | `{"points": N}` |
//!
//! Errors are returned as `{"error": "..."}`: 400 for a receipt that does not
//! match the expected shape, 404 for an unknown id.

pub mod handlers;

use crate::application::processor::ReceiptProcessor;
use crate::error::{ReceiptError, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub type AppState = Arc<ReceiptProcessor>;

/// Builds the service router around a shared processor.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::receipt_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `listener` until ctrl-c.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "receipt service listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("receipt service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReceiptError::InvalidReceipt(_) | ReceiptError::Json(_) => {
                (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string())
            }
            ReceiptError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Receipt ID not found".to_string())
            }
            ReceiptError::Io(_) => {
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
