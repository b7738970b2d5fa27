//! Domain error kinds raised by the catalog core.

use thiserror::Error;

/// Business-rule violations. The message is the whole `Display` output so
/// callers can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            CatalogError::InvalidArgument(message) => message,
        }
    }
}
