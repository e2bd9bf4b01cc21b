//! Persistence layer for blueprints.
//!
//! [`BlueprintStore`] defines the capability set; [`MemoryStore`] keeps
//! identity-keyed aggregates in process, [`PgStore`] (feature `postgres`)
//! persists them relationally with order-preserving child rows.

mod error;
mod memory;
mod traits;

#[cfg(feature = "postgres")]
mod postgres;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::BlueprintStore;

#[cfg(feature = "postgres")]
pub use postgres::PgStore;
