use thiserror::Error;

#[derive(Debug, Error)]
pub enum CosmosError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("generation failed: {0}")]
    Generation(String),
}
