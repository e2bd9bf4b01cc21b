use super::BlueprintFilter;
use crate::blueprint::Blueprint;

/// Collapses consecutive duplicate points.
///
/// The sequence is scanned left to right and a point is kept only when it
/// differs from the previously kept one, so adjacent runs of identical
/// points shrink to a single point while non-adjacent duplicates survive.
/// Idempotent: a second application changes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedundancyFilter;

impl BlueprintFilter for RedundancyFilter {
    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        let mut points = blueprint.points().to_vec();
        points.dedup();
        blueprint.with_sequence(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn blueprint(points: Vec<Point>) -> Blueprint {
        Blueprint::with_points("author", "plan", points).unwrap()
    }

    #[test]
    fn collapses_adjacent_runs() {
        let bp = blueprint(vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(10, 10),
            Point::new(20, 20),
        ]);

        let filtered = RedundancyFilter.apply(&bp);

        assert_eq!(
            filtered.points(),
            &[Point::new(0, 0), Point::new(10, 10), Point::new(20, 20)]
        );
    }

    #[test]
    fn keeps_non_adjacent_duplicates() {
        let bp = blueprint(vec![
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(0, 0),
        ]);

        let filtered = RedundancyFilter.apply(&bp);

        assert_eq!(filtered.points(), bp.points());
    }

    #[test]
    fn empty_sequence_stays_empty() {
        let filtered = RedundancyFilter.apply(&blueprint(Vec::new()));
        assert!(filtered.points().is_empty());
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let bp = blueprint(vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(10, 10),
            Point::new(20, 20),
        ]);

        let once = RedundancyFilter.apply(&bp);
        let twice = RedundancyFilter.apply(&once);

        assert_eq!(once.points(), twice.points());
    }

    #[test]
    fn does_not_mutate_the_input() {
        let bp = blueprint(vec![Point::new(0, 0), Point::new(0, 0)]);

        let _ = RedundancyFilter.apply(&bp);

        assert_eq!(bp.points(), &[Point::new(0, 0), Point::new(0, 0)]);
    }
}
