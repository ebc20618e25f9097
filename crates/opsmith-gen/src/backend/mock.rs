use anyhow::{bail, Result};
use async_trait::async_trait;

use super::TextBackend;

/// A mock backend for testing and offline runs that returns a
/// preconfigured reply without touching the network.
pub struct MockBackend {
    reply: Result<String, String>,
}

impl MockBackend {
    /// Create a mock that answers every prompt with the given text.
    pub fn success(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
        }
    }

    /// Create a mock that fails every generation with the given message.
    pub fn failure(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TextBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn preflight_check(&self) -> Result<()> {
        Ok(())
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{message}"),
        }
    }
}
