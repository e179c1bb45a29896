use std::sync::Arc;

use crate::config::AppConfig;
use crate::infrastructure::inference::InferencePipeline;

/// Shared application state for the HTTP layer
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<InferencePipeline>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pipeline: Arc<InferencePipeline>, config: Arc<AppConfig>) -> Self {
        Self { pipeline, config }
    }
}
