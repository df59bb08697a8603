mod loader;

pub use loader::{InstructionLoader, DEFAULT_INSTRUCTIONS_PATH};
