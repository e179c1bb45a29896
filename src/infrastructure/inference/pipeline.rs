use std::sync::Arc;

use tracing::info;

use super::classifier::classify_syndromes;
use super::keywords::extract_keywords;
use super::validator::validate_response;
use crate::config::CorpusConfig;
use crate::domain::{DomainError, InferenceResult, TextGenerator};
use crate::infrastructure::corpus::{accessor, context_text, search_snippets};

/// Full retrieval-augmented inference pipeline.
///
/// Strictly sequential: extract keywords → retrieve snippets → list
/// images → classify → validate. When retrieval finds nothing the
/// pipeline short-circuits to an empty result without spending the
/// classification call. Every transition is logged with enough detail to
/// reconstruct the exact context sent to the classifier.
#[derive(Debug)]
pub struct InferencePipeline {
    generator: Arc<dyn TextGenerator>,
    corpus: CorpusConfig,
}

impl InferencePipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, corpus: CorpusConfig) -> Self {
        Self { generator, corpus }
    }

    pub async fn infer(&self, query: &str) -> Result<InferenceResult, DomainError> {
        info!("Step 1: extracting keywords from query");
        let keywords = extract_keywords(self.generator.as_ref(), query).await?;
        info!(?keywords, "Extracted keywords");

        info!("Step 2: searching for paragraph snippets across all chapters");
        let snippets = search_snippets(
            &self.corpus.chapters_dir,
            &self.corpus.chapter_suffix,
            &keywords,
        )
        .await?;
        info!(count = snippets.len(), "Found relevant snippets");

        if snippets.is_empty() {
            info!("No snippets matched the keywords; skipping classification");
            return Ok(InferenceResult::default());
        }

        let context_snippets = context_text(&snippets);
        info!(context = %context_snippets, "Context being sent to the classifier");

        info!("Step 3: listing available images");
        let available_images =
            accessor::list_files(&self.corpus.images_dir, &self.corpus.image_suffix).await?;
        info!(count = available_images.len(), "Found images");

        info!("Step 4: running syndrome classification over the snippets");
        let raw = classify_syndromes(
            self.generator.as_ref(),
            query,
            &context_snippets,
            &available_images,
        )
        .await?;

        let result = validate_response(&raw, &available_images);
        info!(
            ischemic = result.ischemic.len(),
            hemorrhagic = result.hemorrhagic.len(),
            "Inference complete"
        );

        Ok(result)
    }
}
