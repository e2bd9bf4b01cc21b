use super::BlueprintFilter;
use crate::blueprint::Blueprint;

/// Keeps only the points at even positions once a sequence grows past two.
///
/// Sequences of two or fewer points pass through unchanged. Order among the
/// kept points is preserved. Repeated application keeps thinning longer
/// sequences, so the filter is not idempotent above the two-point threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct UndersamplingFilter;

impl BlueprintFilter for UndersamplingFilter {
    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        let points = blueprint.points();
        if points.len() <= 2 {
            return blueprint.clone();
        }

        let kept = points.iter().copied().step_by(2).collect();
        blueprint.with_sequence(kept)
    }
}
