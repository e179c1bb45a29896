//! Health check endpoints for liveness/readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::infrastructure::corpus::accessor;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check with corpus availability: the service is degraded when
/// either content directory is unreadable, since every inference request
/// would fail.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let corpus = &state.config.corpus;

    let chapters =
        directory_check("chapters", &corpus.chapters_dir, &corpus.chapter_suffix).await;
    let images = directory_check("images", &corpus.images_dir, &corpus.image_suffix).await;

    let status = if chapters.status == HealthStatus::Healthy
        && images.status == HealthStatus::Healthy
    {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![chapters, images]),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - the process is up
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn directory_check(name: &str, dir: &std::path::Path, suffix: &str) -> HealthCheck {
    match accessor::list_files(dir, suffix).await {
        Ok(_) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(e) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Degraded,
            message: Some(e.to_string()),
        },
    }
}
