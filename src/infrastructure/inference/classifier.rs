use crate::domain::{DomainError, GenerationRequest, TextGenerator};

use super::prompt::{classification_prompt, CLASSIFICATION_SYSTEM_PROMPT};

/// Temperature for the classification call: low, because the answer must
/// stay anchored to the retrieved evidence.
const CLASSIFICATION_TEMPERATURE: f64 = 0.2;

/// Run the constrained classification call and return the raw structured
/// text. Parsing and repair happen in the response validator; transport
/// failures propagate and are fatal to the current request.
pub async fn classify_syndromes(
    generator: &dyn TextGenerator,
    query: &str,
    context_snippets: &str,
    image_list: &[String],
) -> Result<String, DomainError> {
    let request = GenerationRequest::builder()
        .system(CLASSIFICATION_SYSTEM_PROMPT)
        .user(classification_prompt(query, context_snippets, image_list))
        .temperature(CLASSIFICATION_TEMPERATURE)
        .json()
        .build();

    let response = generator.generate(request).await?;
    Ok(response.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockTextGenerator;
    use crate::domain::ResponseFormat;

    #[tokio::test]
    async fn test_classify_issues_one_json_mode_request() {
        let generator = MockTextGenerator::new()
            .with_response(r#"{"ischemic_syndromes": [], "hemorrhagic_syndromes": []}"#);
        let images = vec!["weber.png".to_string()];

        let raw = classify_syndromes(&generator, "ptosis and miosis", "--- snippets ---", &images)
            .await
            .unwrap();

        assert!(raw.contains("ischemic_syndromes"));

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].response_format, ResponseFormat::Json);
        assert_eq!(requests[0].temperature, Some(0.2));
        assert!(requests[0].user_text().contains("--- snippets ---"));
        assert!(requests[0].user_text().contains("weber.png"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let generator = MockTextGenerator::new().with_error("connection reset");

        let result = classify_syndromes(&generator, "query", "context", &[]).await;
        assert!(result.is_err());
    }
}
