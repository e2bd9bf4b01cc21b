//! Store contract for durable, identity-keyed blueprint persistence.

use std::collections::HashSet;

use async_trait::async_trait;
use blueprints_core::{Blueprint, Point};

use super::error::Result;

/// Persistence abstraction for blueprints, keyed by `(author, name)`.
///
/// Implementations must be safe for concurrent callers: reads never observe
/// a partially written blueprint and writes to different identities do not
/// interfere. Every operation stores or returns RAW point sequences;
/// read-time filtering belongs to the service layer, so no implementation
/// may transform data on its own.
#[async_trait]
pub trait BlueprintStore: Send + Sync {
    /// Persists the full aggregate (identity + current points) atomically.
    ///
    /// Fails with `StoreError::AlreadyExists` when a blueprint with the same
    /// `(author, name)` is already stored.
    async fn save(&self, blueprint: &Blueprint) -> Result<()>;

    /// Returns the stored aggregate with its full, unfiltered sequence.
    ///
    /// Fails with `StoreError::NotFound` when no blueprint matches.
    async fn get_one(&self, author: &str, name: &str) -> Result<Blueprint>;

    /// Returns every blueprint stored for `author`.
    ///
    /// Fails with `StoreError::AuthorNotFound` when the author has zero
    /// blueprints. An empty match set is an error here, not an empty
    /// success: callers must not conflate "author unknown" with "author has
    /// no blueprints", since both surface the same miss.
    async fn get_by_author(&self, author: &str) -> Result<HashSet<Blueprint>>;

    /// Returns all stored blueprints. Never fails; the set may be empty.
    async fn get_all(&self) -> Result<HashSet<Blueprint>>;

    /// Appends `point` to the stored sequence and persists the new state.
    ///
    /// Fails with `StoreError::NotFound` when no blueprint matches.
    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()>;
}
