pub mod chat;
pub mod error;
pub mod generation;
pub mod mode;
pub mod sanitize;

pub use chat::{ChatRequest, ChatResponse, ErrorBody};
pub use error::CosmosError;
pub use generation::GenerationConfig;
pub use mode::{resolve_prompt, Mode, ResolvedPrompt};
pub use sanitize::sanitize;
