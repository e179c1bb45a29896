//! Generative-text domain models and the provider trait

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::TextGenerator;
pub use request::{GenerationRequest, GenerationRequestBuilder, ResponseFormat};
pub use response::{FinishReason, GenerationResponse};

#[cfg(test)]
pub use provider::mock::MockTextGenerator;
