//! The retrieval-augmented inference pipeline

pub mod classifier;
pub mod keywords;
pub mod pipeline;
pub mod prompt;
pub mod validator;

pub use pipeline::InferencePipeline;
