pub mod gemini;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for opaque prompt-in/text-out generation backends.
///
/// Each backend encapsulates:
/// - How to reach the remote text-generation service
/// - What credentials it needs
/// - How to map transport/quota/auth failures into errors
///
/// The trait does NOT handle:
/// - Prompt assembly (handled by opsmith-prompts)
/// - Response parsing (handled by the pipeline)
/// - Retries, backoff or caching (deliberately out of scope)
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Validate that the backend is usable (credentials present, etc.).
    /// Called once before the first generation attempt.
    async fn preflight_check(&self) -> Result<()>;

    /// Send one prompt and wait for the raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
