//! Domain layer - core entities and collaborator contracts

pub mod error;
pub mod llm;
pub mod syndrome;

pub use error::DomainError;
pub use llm::{
    FinishReason, GenerationRequest, GenerationRequestBuilder, GenerationResponse, Message,
    MessageRole, ResponseFormat, TextGenerator,
};
pub use syndrome::{InferenceResult, Syndrome, MAX_HEMORRHAGIC, MAX_ISCHEMIC};
