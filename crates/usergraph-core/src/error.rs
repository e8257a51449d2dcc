use thiserror::Error;

/// Top-level error type for usergraph.
#[derive(Error, Debug)]
pub enum UsergraphError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
