//! Client configuration

use std::time::Duration;

/// Where the client code is running
///
/// Only a browser session carries a stored token; server-side rendering
/// sends requests unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderContext {
    #[default]
    Browser,
    Server,
}

/// Client configuration for connecting to the hotel backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// How long the loading marker may stay on before it is forced off
    pub loading_safety_timeout: Duration,

    pub render_context: RenderContext,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            loading_safety_timeout: Duration::from_secs(30),
            render_context: RenderContext::Browser,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the loading marker safety timeout
    pub fn with_loading_safety_timeout(mut self, timeout: Duration) -> Self {
        self.loading_safety_timeout = timeout;
        self
    }

    pub fn with_render_context(mut self, context: RenderContext) -> Self {
        self.render_context = context;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
