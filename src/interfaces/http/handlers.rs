use super::AppState;
use crate::domain::points::Points;
use crate::domain::receipt::Receipt;
use crate::domain::receipt_id::ReceiptId;
use crate::error::{ReceiptError, Result};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// `POST /receipts/process`
#[instrument(skip_all)]
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "rejected receipt");
        ReceiptError::InvalidReceipt(rejection.body_text())
    })?;

    let id = state.process(&receipt).await;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
#[instrument(skip(state))]
pub async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let id = ReceiptId::from(id);
    match state.points(&id).await {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => Err(ReceiptError::NotFound(id)),
    }
}
