//! Infrastructure layer - filesystem corpus, Gemini provider, pipeline

pub mod corpus;
pub mod inference;
pub mod llm;
pub mod logging;
