//! HTTP request processing for the summarize endpoint

pub mod gateway;
pub mod handler;
pub mod helpers;
#[cfg(feature = "server")]
pub mod router;

// Re-export the main entry points for convenience
pub use handler::respond;
#[cfg(feature = "server")]
pub use router::{AppState, router, serve};
