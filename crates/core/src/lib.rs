//! Domain model for the blueprint management system.
//!
//! A [`Blueprint`] is an `(author, name)`-identified aggregate owning an
//! append-only, ordered sequence of [`Point`]s. Read paths run a
//! [`BlueprintFilter`] over every blueprint before exposing it; the three
//! shipped variants are selected once at startup through [`FilterKind`].
//!
//! This crate is pure data and transforms. Persistence and orchestration
//! live in `blueprints-service`.

mod blueprint;
mod error;
mod point;

pub mod filter;

pub use blueprint::Blueprint;
pub use error::BlueprintError;
pub use filter::{
    BlueprintFilter, FilterKind, IdentityFilter, RedundancyFilter, UndersamplingFilter,
};
pub use point::Point;
