//! Feed error types

use thiserror::Error;

/// Errors delivered through a subscription's error callback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Remote store reported a failure
    #[error("{0}")]
    Remote(String),

    /// The store is no longer running
    #[error("Order feed closed")]
    Closed,
}

impl FeedError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
}

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;
