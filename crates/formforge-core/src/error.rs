//! Error types for editing and storage.
//!
//! Defined in `formforge-core` so callers can classify failures without
//! string matching.

use thiserror::Error;
use uuid::Uuid;

use crate::model::QuestionKind;

/// Errors returned by question editor operations.
///
/// A failing operation returns the error and leaves its input untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// An indexed operation addressed a position past the end.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A kind-specific operation was applied to a question of another kind.
    #[error("expected a {expected} question, got {actual}")]
    KindMismatch {
        expected: QuestionKind,
        actual: QuestionKind,
    },
}

/// Errors returned by `FormStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// An underlying I/O operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be serialized or deserialized.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns `true` if this error is a simple miss rather than a
    /// storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
