//! Read-time point-sequence transforms.
//!
//! A filter is a pure strategy the service applies to every blueprint
//! returned from a read. Writes are never filtered, so the stored sequence
//! stays raw and switching the active filter never loses data.

mod identity;
mod redundancy;
mod undersampling;

use strum::{Display, EnumString};

use crate::blueprint::Blueprint;

pub use identity::IdentityFilter;
pub use redundancy::RedundancyFilter;
pub use undersampling::UndersamplingFilter;

/// Pure transform over a blueprint's point sequence.
///
/// Implementations must not mutate the input and must return a blueprint
/// carrying the same `(author, name)` identity. All shipped filters are
/// stateless, so a single instance is safe to share across callers without
/// synchronization.
pub trait BlueprintFilter: Send + Sync {
    fn apply(&self, blueprint: &Blueprint) -> Blueprint;
}

/// Enumerated filter selection.
///
/// Resolved once by the startup collaborator (flag or environment) and fixed
/// for the lifetime of the service instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Identity,
    Redundancy,
    Undersampling,
}

impl FilterKind {
    /// Instantiates the concrete filter this variant names.
    pub fn instantiate(self) -> Box<dyn BlueprintFilter> {
        match self {
            FilterKind::Identity => Box::new(IdentityFilter),
            FilterKind::Redundancy => Box::new(RedundancyFilter),
            FilterKind::Undersampling => Box::new(UndersamplingFilter),
        }
    }
}
