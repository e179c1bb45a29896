use std::fmt::Debug;

use async_trait::async_trait;

use super::{GenerationRequest, GenerationResponse};
use crate::domain::DomainError;

/// Trait for generative-text backends.
///
/// The pipeline issues two call shapes through this seam: a free-form
/// keyword extraction request and a JSON-constrained classification
/// request. Transport failures are fatal to the current request.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Issue one generation call and return the response text.
    async fn generate(&self, request: GenerationRequest)
        -> Result<GenerationResponse, DomainError>;

    /// Name of the backing provider, for error messages and logs.
    fn provider_name(&self) -> &'static str;
}
