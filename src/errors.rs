// src/errors.rs

use thiserror::Error;

pub type MirageResult<T> = Result<T, MirageError>;

#[derive(Debug, Error)]
pub enum MirageError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl MirageError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        MirageError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        MirageError::Logging(msg.into())
    }
}
