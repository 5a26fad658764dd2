//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport(message.into())
    }
}
