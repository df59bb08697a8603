mod gemini;
mod mock;

pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock::MockGenerator;

use async_trait::async_trait;
use cosmos_core::GenerationConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Transport(String),

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response was blocked due to {0}")]
    Blocked(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// One recorded invocation of a [`Generator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCall {
    pub prompt: String,
    pub system_instruction: String,
    pub config: GenerationConfig,
}

/// Remote text generation.
///
/// Turns a prompt plus a system-level instruction into generated text.
/// Implementations make at most one attempt per call: no retry, no cache.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerateError>;
}
