//! Cleanup applied to generated text before it is returned to the caller.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::mode::Mode;

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```(?:json)?\s*").expect("valid leading fence pattern"));

static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*$").expect("valid trailing fence pattern"));

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid fenced block pattern"));

static BLOCK_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```[0-9A-Za-z_]*\s*").expect("valid block open pattern"));

static BLOCK_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```$").expect("valid block close pattern"));

/// Characters cut from each end of an Earth Json reply.
const EARTH_HEAD: usize = 7;
const EARTH_TAIL: usize = 3;

/// Strip code-fence artifacts from generated text, then apply the
/// mode-specific trim.
///
/// Only one leading and one trailing fence marker are removed at the string
/// boundaries; any complete fenced block left inside the text loses its
/// markers but keeps its content. Never fails: the worst case is an empty
/// string.
pub fn sanitize(text: &str, mode: Mode) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = strip_fences(text.trim());
    let cleaned = cleaned.trim();

    match mode {
        Mode::EarthJson => earth_trim(cleaned),
        _ => cleaned.to_string(),
    }
}

fn strip_fences(text: &str) -> String {
    let text = LEADING_FENCE.replace(text, "");
    let text = TRAILING_FENCE.replace(&text, "");
    FENCED_BLOCK
        .replace_all(&text, |caps: &Captures| {
            let block = BLOCK_OPEN.replace(&caps[0], "");
            BLOCK_CLOSE.replace(&block, "").into_owned()
        })
        .into_owned()
}

// Positional: assumes the Earth template always wraps its JSON in a
// fixed-width envelope. Replace with brace matching if that ever changes.
fn earth_trim(text: &str) -> String {
    let len = text.chars().count();
    if len < EARTH_HEAD + EARTH_TAIL {
        return String::new();
    }
    text.chars()
        .skip(EARTH_HEAD)
        .take(len - EARTH_HEAD - EARTH_TAIL)
        .collect()
}
