use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::state::AppState;
use super::{health, infer};

/// Create the application router: inference endpoint, health probes and
/// the statically served image directory. CORS is permissive, matching
/// the deployment where the frontend is served from another origin.
pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.corpus.images_dir);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/infer", post(infer::infer_syndrome))
        .nest_service("/images", images)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
