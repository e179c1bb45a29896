//! Neurological syndrome inference API
//!
//! Accepts a free-text clinical description and returns candidate
//! neurological syndromes in two categories (ischemic, hemorrhagic),
//! each grounded in paragraph snippets retrieved from a chapter corpus
//! and optionally illustrated by an image from the inventory.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::AppState;
use domain::TextGenerator;
use infrastructure::inference::InferencePipeline;
use infrastructure::llm::{GeminiProvider, HttpClient};

/// Wire the application state: HTTP client with the configured timeout,
/// Gemini provider, inference pipeline.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let http_client = HttpClient::with_timeout(Duration::from_secs(config.gemini.timeout_secs))?;

    let generator: Arc<dyn TextGenerator> = match &config.gemini.base_url {
        Some(base_url) => Arc::new(GeminiProvider::with_base_url(
            http_client,
            &config.gemini.api_key,
            &config.gemini.model,
            base_url,
        )),
        None => Arc::new(GeminiProvider::new(
            http_client,
            &config.gemini.api_key,
            &config.gemini.model,
        )),
    };

    let pipeline = Arc::new(InferencePipeline::new(generator, config.corpus.clone()));

    Ok(AppState::new(pipeline, Arc::new(config)))
}
