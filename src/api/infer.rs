use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use super::error::ApiError;
use super::state::AppState;
use crate::domain::InferenceResult;

/// Incoming inference request: the free-text clinical description
#[derive(Debug, Deserialize)]
pub struct InferenceRequest {
    pub query: String,
}

/// `POST /infer` - run the full retrieval-augmented inference pipeline
/// and return the categorized syndrome lists.
pub async fn infer_syndrome(
    State(state): State<AppState>,
    Json(request): Json<InferenceRequest>,
) -> Result<Json<InferenceResult>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Query cannot be empty"));
    }

    info!(query = %request.query, "Received inference request");

    let result = state.pipeline.infer(&request.query).await?;

    Ok(Json(result))
}
