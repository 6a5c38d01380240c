//! Error types for model lookups.

use thiserror::Error;

/// Errors that can occur when looking things up in, or naming things of, a
/// built model.
///
/// Builders never return these: problems found while building the model are
/// reported as [`ValidationFailure`](crate::model::ValidationFailure)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No namespace with this name was registered.
    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),

    /// The text does not name an entity kind.
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    /// The text does not name a property kind.
    #[error("Unknown property kind: {0}")]
    UnknownPropertyKind(String),
}

impl ModelError {
    /// Create an unknown namespace error.
    pub fn unknown_namespace(name: impl Into<String>) -> Self {
        Self::UnknownNamespace(name.into())
    }
}

/// Result type for model lookups.
pub type ModelResult<T> = Result<T, ModelError>;
