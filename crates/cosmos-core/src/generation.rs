use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Sampling parameters sent alongside each generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: None,
        }
    }
}

impl GenerationConfig {
    /// Advanced mode runs cooler and capped; every other mode uses the default.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Advanced => Self {
                temperature: 0.3,
                max_output_tokens: Some(250),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GenerationConfig::for_mode(Mode::Default);
        assert_eq!(c.temperature, 0.7);
        assert_eq!(c.max_output_tokens, None);
        for mode in [Mode::EarthJson, Mode::SearchCosmic, Mode::Beginner] {
            assert_eq!(GenerationConfig::for_mode(mode), GenerationConfig::default());
        }
    }

    #[test]
    fn advanced_override() {
        let c = GenerationConfig::for_mode(Mode::Advanced);
        assert_eq!(c.temperature, 0.3);
        assert_eq!(c.max_output_tokens, Some(250));
    }

    #[test]
    fn wire_format() {
        let v = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(v, serde_json::json!({ "temperature": 0.7 }));

        let v = serde_json::to_value(GenerationConfig::for_mode(Mode::Advanced)).unwrap();
        assert_eq!(v["maxOutputTokens"], 250);
        assert!(v.get("max_output_tokens").is_none());
    }
}
