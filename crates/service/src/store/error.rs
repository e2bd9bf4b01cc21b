//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by store implementations.
///
/// The not-found and already-exists kinds are part of the store contract and
/// propagate unchanged through the service to the boundary; the remaining
/// kinds are fatal/opaque backend failures that the core never masks.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("blueprint not found: {author}/{name}")]
    NotFound { author: String, name: String },

    #[error("no blueprints for author: {author}")]
    AuthorNotFound { author: String },

    #[error("blueprint already exists: {author}/{name}")]
    AlreadyExists { author: String, name: String },

    #[error("blueprint store lock was poisoned")]
    LockPoisoned,

    #[error("corrupted row: {0}")]
    Corrupted(String),

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "postgres")]
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn not_found(author: &str, name: &str) -> Self {
        Self::NotFound {
            author: author.to_owned(),
            name: name.to_owned(),
        }
    }

    pub fn author_not_found(author: &str) -> Self {
        Self::AuthorNotFound {
            author: author.to_owned(),
        }
    }

    pub fn already_exists(author: &str, name: &str) -> Self {
        Self::AlreadyExists {
            author: author.to_owned(),
            name: name.to_owned(),
        }
    }

    /// True for the lookup-miss kinds (single blueprint or whole author).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AuthorNotFound { .. })
    }

    /// True for the uniqueness-conflict kind.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
