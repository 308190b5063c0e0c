use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use receipts_core::ReceiptId;
use receipts_store::ReceiptStoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("The receipt is invalid.")]
    BadRequest(String),
    #[error("No receipt found for that ID.")]
    NotFound(ReceiptId),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl From<ReceiptStoreError> for ApiError {
    fn from(e: ReceiptStoreError) -> Self {
        match e {
            ReceiptStoreError::NotFound(id) => Self::NotFound(id),
            ReceiptStoreError::DuplicateId(_) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "rejected receipt");
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::NotFound(id) => {
                tracing::warn!(id = %id, "receipt not found");
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        let body = ErrorBody {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
