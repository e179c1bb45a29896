use crate::domain::{DomainError, GenerationRequest, TextGenerator};

use super::prompt::keyword_extraction_prompt;

/// Extract normalized English clinical keywords from a free-text query.
///
/// One free-form generation call; the returned comma-separated list is
/// split, trimmed and cleared of empty pieces. Duplicates are kept —
/// retrieval tolerates them. A generator failure propagates to the
/// orchestrator uncaught.
pub async fn extract_keywords(
    generator: &dyn TextGenerator,
    query: &str,
) -> Result<Vec<String>, DomainError> {
    let request = GenerationRequest::builder()
        .user(keyword_extraction_prompt(query))
        .build();

    let response = generator.generate(request).await?;
    Ok(split_keywords(&response.text))
}

fn split_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
