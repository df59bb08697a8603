use std::sync::Mutex;

use async_trait::async_trait;
use cosmos_core::GenerationConfig;

use crate::{GenerateCall, GenerateError, Generator};

/// A canned generator for tests. Returns a fixed reply (or failure) and
/// records every call it receives.
pub struct MockGenerator {
    reply: Result<String, String>,
    calls: Mutex<Vec<GenerateCall>>,
}

impl MockGenerator {
    pub fn success(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<GenerateCall> {
        self.calls().pop()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerateError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(GenerateCall {
                prompt: prompt.to_string(),
                system_instruction: system_instruction.to_string(),
                config: *config,
            });
        }
        self.reply.clone().map_err(GenerateError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls() {
        let mock = MockGenerator::success("hi");
        let out = mock
            .generate("p", "sys", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(out, "hi");
        let call = mock.last_call().unwrap();
        assert_eq!(call.prompt, "p");
        assert_eq!(call.system_instruction, "sys");
        assert_eq!(call.config, GenerationConfig::default());
    }

    #[tokio::test]
    async fn failure_surfaces_message() {
        let mock = MockGenerator::failure("quota exceeded");
        let err = mock
            .generate("p", "", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(mock.calls().len(), 1);
    }
}
