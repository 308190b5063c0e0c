use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipts_core::{PointsResponse, ProcessReceiptResponse, Receipt, ReceiptId};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    receipts: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len().await,
    })
}

async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let id = state.store.submit(receipt).await?;
    info!(id = %id, "receipt stored");
    Ok(Json(ProcessReceiptResponse { id }))
}

async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = ReceiptId::from(id);
    let receipt = state.store.lookup(&id).await?;

    let points = receipts_scoring::score(&receipt);
    info!(id = %id, points, "receipt scored");
    Ok(Json(PointsResponse { points }))
}
