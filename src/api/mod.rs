//! API layer - HTTP endpoints

pub mod error;
pub mod health;
pub mod infer;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use router::create_router;
pub use state::AppState;
