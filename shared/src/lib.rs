//! Shared types for the hotel front desk
//!
//! Common types used by both the mock backend and the front-desk client:
//! domain records, error types, the API response envelope and pricing.

pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
