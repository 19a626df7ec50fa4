use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error(
        "Failed to generate a self-avoiding walk for N={chain_length} within {max_restarts} attempts; increase max-restarts or reduce the chain length"
    )]
    ExhaustedRestarts {
        chain_length: usize,
        max_restarts: usize,
    },

    #[error("Invalid chain length {0}: a walk contains at least its origin")]
    InvalidChainLength(usize),

    #[error("Invalid simulation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
