use std::fmt;

use serde::{Deserialize, Serialize};

/// Request-handling variant selected by the prompt prefix. Governs which
/// instruction template is loaded and how the reply is sanitized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "Earth Json")]
    EarthJson,
    #[serde(rename = "Search cosmic")]
    SearchCosmic,
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "advanced")]
    Advanced,
}

/// Prefixed modes in match priority order.
const PREFIXED: [Mode; 4] = [
    Mode::EarthJson,
    Mode::SearchCosmic,
    Mode::Beginner,
    Mode::Advanced,
];

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::EarthJson => "Earth Json",
            Mode::SearchCosmic => "Search cosmic",
            Mode::Beginner => "beginner",
            Mode::Advanced => "advanced",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Mode::Default),
            "Earth Json" => Some(Mode::EarthJson),
            "Search cosmic" => Some(Mode::SearchCosmic),
            "beginner" => Some(Mode::Beginner),
            "advanced" => Some(Mode::Advanced),
            _ => None,
        }
    }

    /// Exact-match label lookup. Anything unrecognised falls back to `Default`.
    pub fn from_label(s: &str) -> Self {
        Self::parse_str(s).unwrap_or_default()
    }

    /// Lowercase keyword that selects this mode at the head of a prompt.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Mode::Default => None,
            Mode::EarthJson => Some("use earth methods"),
            Mode::SearchCosmic => Some("search cosmic"),
            Mode::Beginner => Some("beginner mode"),
            Mode::Advanced => Some("advanced mode"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt with its mode keyword stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrompt<'a> {
    pub mode: Mode,
    pub prompt: &'a str,
}

/// Pick the mode for a raw prompt and strip its keyword.
///
/// Keywords are compared case-insensitively and checked in a fixed order
/// (earth, cosmic, beginner, advanced). The first match wins; exactly the
/// keyword's length is cut from the original text and the rest is trimmed.
/// Without a match the mode is `Default` and the whole prompt is trimmed.
pub fn resolve_prompt(raw: &str) -> ResolvedPrompt<'_> {
    for mode in PREFIXED {
        let Some(prefix) = mode.prefix() else {
            continue;
        };
        if let Some(rest) = strip_prefix_ignore_case(raw, prefix) {
            return ResolvedPrompt {
                mode,
                prompt: rest.trim(),
            };
        }
    }
    ResolvedPrompt {
        mode: Mode::Default,
        prompt: raw.trim(),
    }
}

// Keywords are ASCII, so a byte-wise match always ends on a char boundary.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.as_bytes().get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
