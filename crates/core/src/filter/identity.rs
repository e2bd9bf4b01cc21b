use super::BlueprintFilter;
use crate::blueprint::Blueprint;

/// Default filter: returns the blueprint with its sequence untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityFilter;

impl BlueprintFilter for IdentityFilter {
    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        blueprint.clone()
    }
}
