//! Unified error type surfaced by the service API.
//!
//! Store failures bubble through unchanged so boundaries can map the
//! not-found and conflict kinds directly to their own status codes.

use thiserror::Error;

use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blueprint service requires a store to be configured before building")]
    MissingStore,
}

impl ServiceError {
    /// True when the underlying failure is one of the lookup-miss kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_not_found())
    }

    /// True when the underlying failure is the uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_conflict())
    }
}
