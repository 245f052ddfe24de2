use crate::error::Result;
use async_trait::async_trait;

/// Single-turn text generation. Failures come back as
/// `PaimonError::Generation` carrying a diagnostic string.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model name shown in the UI header.
    fn model(&self) -> &str;
}
