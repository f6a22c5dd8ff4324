use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::interfaces::http::dto::{PointsResponse, ProcessReceiptResponse};
use crate::interfaces::http::error::{ApiError, ApiResult, INVALID_RECEIPT};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

/// Create the API router
pub fn create_router(processor: ReceiptProcessor) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(processor)
}

/// Accept and score a receipt
///
/// The body is decoded as JSON regardless of its `Content-Type`.
pub async fn process_receipt(
    State(processor): State<ReceiptProcessor>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Undecodable receipt: {}", e);
        ApiError::BadRequest(INVALID_RECEIPT.to_string())
    })?;

    let id = processor.process(receipt)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Get the points awarded to a receipt
pub async fn get_points(
    State(processor): State<ReceiptProcessor>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = processor.points(&ReceiptId::new(id))?;
    Ok(Json(PointsResponse { points }))
}
