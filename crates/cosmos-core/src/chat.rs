use serde::{Deserialize, Serialize};

use crate::error::CosmosError;

pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Inbound body of `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }

    /// The prompt, provided it is present and non-empty.
    pub fn validated_prompt(&self) -> Result<&str, CosmosError> {
        match self.prompt.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(CosmosError::InvalidInput(PROMPT_REQUIRED.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
