//! Validation errors raised when constructing domain values.

use thiserror::Error;

/// Errors raised by [`Blueprint`](crate::Blueprint) construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    #[error("blueprint author must not be empty")]
    EmptyAuthor,

    #[error("blueprint name must not be empty")]
    EmptyName,
}
