//! Text-generation provider abstraction.
//!
//! The relay talks to its backend through `TextProvider` so tests can swap
//! the real Gemini client for a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations. All variants collapse to the same
/// caller-facing failure; they exist so `Display` yields a useful description.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion request. A reply without any text (e.g. a blocked
/// prompt) is a `ProviderError`, not an empty response.
pub struct ProviderResponse {
    pub text: String,
}

/// Trait for text-generation backends (e.g. Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Request a single completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Verify the backend is reachable with the configured credentials.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
