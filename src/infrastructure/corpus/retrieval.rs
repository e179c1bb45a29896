use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use super::accessor;
use crate::domain::DomainError;

/// Value sent to the classifier when no paragraph matched any keyword.
pub const NO_INFORMATION_SENTINEL: &str = "No relevant information found for the given keywords.";

/// Scan every chapter for paragraphs containing any of the keywords.
///
/// Paragraphs are blocks separated by blank lines. Matching is a plain
/// case-insensitive substring test; the first keyword hit includes the
/// paragraph and stops testing further keywords, so a paragraph appears at
/// most once regardless of how many keywords it satisfies. Snippets are
/// deduplicated by their full formatted text, in file order then paragraph
/// order.
///
/// A directory-level failure is fatal; a failure reading one chapter is
/// logged and the scan continues.
pub async fn search_snippets(
    chapters_dir: &Path,
    suffix: &str,
    keywords: &[String],
) -> Result<Vec<String>, DomainError> {
    let chapter_files = accessor::list_files(chapters_dir, suffix).await?;
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut snippets = Vec::new();
    let mut seen = HashSet::new();

    for filename in &chapter_files {
        let text = match accessor::read_document(chapters_dir, filename).await {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %filename, error = %e, "Could not process chapter file");
                continue;
            }
        };

        for paragraph in text.split("\n\n") {
            let trimmed = paragraph.trim();
            if trimmed.is_empty() {
                continue;
            }

            let paragraph_lower = paragraph.to_lowercase();
            for keyword in &lowered {
                if paragraph_lower.contains(keyword.as_str()) {
                    let snippet = format!("--- Snippet from {} ---\n{}\n", filename, trimmed);
                    if seen.insert(snippet.clone()) {
                        snippets.push(snippet);
                    }
                    break;
                }
            }
        }
    }

    Ok(snippets)
}

/// Join the snippet blocks into the context sent to the classifier, or the
/// sentinel when nothing matched.
pub fn context_text(snippets: &[String]) -> String {
    if snippets.is_empty() {
        NO_INFORMATION_SENTINEL.to_string()
    } else {
        snippets.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_single_keyword_extracts_matching_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ch01_extracted.txt"),
            "Patient has ptosis and miosis.\n\nUnrelated paragraph about gait.",
        )
        .unwrap();

        let snippets = search_snippets(dir.path(), "_extracted.txt", &keywords(&["ptosis"]))
            .await
            .unwrap();

        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].contains("Patient has ptosis and miosis."));
        assert!(snippets[0].starts_with("--- Snippet from ch01_extracted.txt ---\n"));
        assert!(!snippets[0].contains("gait"));
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ch01_extracted.txt"),
            "Sudden Hemiparesis of the right side.",
        )
        .unwrap();

        let snippets = search_snippets(dir.path(), "_extracted.txt", &keywords(&["hemiparesis"]))
            .await
            .unwrap();

        assert_eq!(snippets.len(), 1);
    }

    #[tokio::test]
    async fn test_paragraph_matching_multiple_keywords_appears_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ch01_extracted.txt"),
            "Patient has ptosis and miosis and anhidrosis.",
        )
        .unwrap();

        let snippets = search_snippets(
            dir.path(),
            "_extracted.txt",
            &keywords(&["ptosis", "miosis", "anhidrosis"]),
        )
        .await
        .unwrap();

        assert_eq!(snippets.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_paragraphs_across_files_kept_per_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a_extracted.txt"), "Ptosis is present.").unwrap();
        fs::write(dir.path().join("b_extracted.txt"), "Ptosis is present.").unwrap();

        let snippets = search_snippets(dir.path(), "_extracted.txt", &keywords(&["ptosis"]))
            .await
            .unwrap();

        // Same paragraph text, but the source tag differs, so both survive dedup.
        assert_eq!(snippets.len(), 2);
        assert!(snippets[0].contains("a_extracted.txt"));
        assert!(snippets[1].contains("b_extracted.txt"));
    }

    #[tokio::test]
    async fn test_retrieval_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ch01_extracted.txt"),
            "Ptosis noted.\n\nDysarthria noted.\n\nNormal exam.",
        )
        .unwrap();

        let kws = keywords(&["ptosis", "dysarthria"]);
        let first = search_snippets(dir.path(), "_extracted.txt", &kws).await.unwrap();
        let second = search_snippets(dir.path(), "_extracted.txt", &kws).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_yields_empty_and_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ch01_extracted.txt"), "Normal examination.").unwrap();

        let snippets = search_snippets(dir.path(), "_extracted.txt", &keywords(&["aphasia"]))
            .await
            .unwrap();

        assert!(snippets.is_empty());
        assert_eq!(context_text(&snippets), NO_INFORMATION_SENTINEL);
    }

    #[tokio::test]
    async fn test_unreadable_chapter_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad_extracted.txt"), [0xff, 0xfe]).unwrap();
        fs::write(dir.path().join("good_extracted.txt"), "Ptosis present.").unwrap();

        let snippets = search_snippets(dir.path(), "_extracted.txt", &keywords(&["ptosis"]))
            .await
            .unwrap();

        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].contains("good_extracted.txt"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_fatal() {
        let result = search_snippets(
            Path::new("/nonexistent/chapters"),
            "_extracted.txt",
            &keywords(&["ptosis"]),
        )
        .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_context_text_joins_with_newline() {
        let snippets = vec!["--- a ---\nfoo\n".to_string(), "--- b ---\nbar\n".to_string()];
        assert_eq!(context_text(&snippets), "--- a ---\nfoo\n\n--- b ---\nbar\n");
    }
}
