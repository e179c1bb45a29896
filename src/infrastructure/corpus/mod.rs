//! Read-only access to the chapter corpus and image inventory

pub mod accessor;
pub mod retrieval;

pub use retrieval::{context_text, search_snippets, NO_INFORMATION_SENTINEL};
