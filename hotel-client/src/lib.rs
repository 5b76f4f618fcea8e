//! Hotel Client - front-desk core for the hotel backend
//!
//! - [`http`]: REST client with bearer token and loading gate
//! - [`api`]: typed endpoint wrappers
//! - [`dialog`]: confirmation / message dialog dispatch
//! - [`errors`]: request failure → dialog mapping
//! - [`loading`]: global loading marker
//! - [`storage`]: session storage with token obfuscation
//! - [`views`]: booking / room joins for the dashboard tables

pub mod api;
pub mod config;
pub mod dialog;
pub mod error;
pub mod errors;
pub mod http;
pub mod loading;
pub mod storage;
pub mod views;

pub use api::HotelApi;
pub use config::{ClientConfig, RenderContext};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models;
