use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RecommendationEnvelope, RecommendationRequest},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Bare `OPTIONS` without CORS pre-flight headers; real pre-flights are answered by the CORS layer
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Generates recommendations for an uploaded garment
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationEnvelope>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection, "Rejected recommendation request");
        rejection
    })?;

    tracing::info!(
        request_id = %request_id,
        item_type = %request.item_type,
        gender = %request.gender,
        user_id = request.user_id.as_deref().unwrap_or("anonymous"),
        "Processing recommendation request"
    );

    let envelope = recommendations::recommend(
        state.rules,
        state.captioner.as_ref(),
        state.store.as_ref(),
        &request,
    )
    .await?;

    Ok(Json(envelope))
}
