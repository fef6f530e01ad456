//! Error types for session-bridge.
//!
//! Driver failures are never translated: a rejected promise carries the
//! driver's own error value inside [`PromiseError::Rejected`].

use thiserror::Error;

/// Error produced when awaiting a [`Promise`](crate::promise::Promise).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromiseError<E> {
    /// The completion source failed with this cause, passed through unchanged
    #[error(transparent)]
    Rejected(E),

    /// The completion source was dropped without ever settling
    #[error("Promise abandoned: completion source dropped without a result")]
    Abandoned,
}

impl<E> PromiseError<E> {
    /// Check if the underlying operation reported a failure.
    pub fn is_rejected(&self) -> bool {
        matches!(self, PromiseError::Rejected(_))
    }

    /// Check if the completion source went away without settling.
    pub fn is_abandoned(&self) -> bool {
        matches!(self, PromiseError::Abandoned)
    }

    /// Borrow the driver's failure cause, if any.
    pub fn cause(&self) -> Option<&E> {
        match self {
            PromiseError::Rejected(cause) => Some(cause),
            PromiseError::Abandoned => None,
        }
    }

    /// Take the driver's failure cause, if any.
    pub fn into_cause(self) -> Option<E> {
        match self {
            PromiseError::Rejected(cause) => Some(cause),
            PromiseError::Abandoned => None,
        }
    }
}

/// Errors related to adapter configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}
