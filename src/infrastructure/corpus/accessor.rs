use std::path::Path;

use crate::domain::DomainError;

/// List the filenames in `dir` ending with `suffix`, sorted for a stable
/// scan order.
///
/// A missing directory or an empty match set is a fatal misconfiguration
/// for the whole pipeline, so both surface as `NotFound`.
pub async fn list_files(dir: &Path, suffix: &str) -> Result<Vec<String>, DomainError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        DomainError::not_found(format!("Directory not found: {} ({})", dir.display(), e))
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        DomainError::internal(format!("Failed to read {}: {}", dir.display(), e))
    })? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) {
            files.push(name);
        }
    }

    if files.is_empty() {
        return Err(DomainError::not_found(format!(
            "No '{}' files found in {}",
            suffix,
            dir.display()
        )));
    }

    files.sort();
    Ok(files)
}

/// Read one document as UTF-8 text. Callers treat failures as
/// per-document conditions: log, skip, continue the scan.
pub async fn read_document(dir: &Path, name: &str) -> Result<String, DomainError> {
    let path = dir.join(name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to read {}: {}", path.display(), e)))?;

    String::from_utf8(bytes)
        .map_err(|_| DomainError::internal(format!("{} is not valid UTF-8", path.display())))
}
