//! Storage and orchestration for the blueprint management system.
//!
//! This crate wires the persistence abstraction and the read-time filter
//! strategy into [`BlueprintService`], the composition point external
//! boundaries call into. Modules are organized by responsibility:
//! - [`store`] defines the `BlueprintStore` capability set and ships the
//!   in-memory implementation plus a Postgres one behind the `postgres`
//!   feature
//! - [`service`] hosts the orchestrator and its builder
//! - [`error`] unifies the failures surfaced to callers

pub mod error;
pub mod service;
pub mod store;

pub use error::{Result, ServiceError};
pub use service::{BlueprintService, ServiceBuilder};
pub use store::{BlueprintStore, MemoryStore, StoreError};

#[cfg(feature = "postgres")]
pub use store::PgStore;
