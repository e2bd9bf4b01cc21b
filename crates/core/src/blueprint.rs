//! Blueprint aggregate: an `(author, name)` identity owning an ordered,
//! append-only point sequence.

use std::hash::{Hash, Hasher};

use crate::error::BlueprintError;
use crate::point::Point;

/// Named, author-owned ordered sequence of [`Point`]s.
///
/// # Identity
///
/// Equality and hashing are computed from `(author, name)` ONLY, both
/// case-sensitive. Two blueprints with the same identity but different point
/// sequences compare equal, so identity-keyed containers (e.g.
/// `HashSet<Blueprint>`) keep the first-seen sequence for a given identity.
/// This is intentional: lookups and deduplication work on identity without
/// regard to the mutable payload.
///
/// # Ownership
///
/// The point sequence is owned exclusively by the blueprint and is
/// append-only: it grows one point at a time through
/// [`append_point`](Self::append_point) and is never reordered or truncated.
/// [`points`](Self::points) hands out a shared slice, so external mutation
/// is impossible by construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blueprint {
    author: String,
    name: String,
    points: Vec<Point>,
}

impl Blueprint {
    /// Creates an empty blueprint for the given identity.
    ///
    /// Fails when `author` or `name` is empty.
    pub fn new(
        author: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, BlueprintError> {
        Self::with_points(author, name, Vec::new())
    }

    /// Creates a blueprint with an initial point sequence.
    ///
    /// The sequence is moved into the aggregate; callers keep no alias to it.
    pub fn with_points(
        author: impl Into<String>,
        name: impl Into<String>,
        points: Vec<Point>,
    ) -> Result<Self, BlueprintError> {
        let author = author.into();
        let name = name.into();

        if author.is_empty() {
            return Err(BlueprintError::EmptyAuthor);
        }
        if name.is_empty() {
            return Err(BlueprintError::EmptyName);
        }

        Ok(Self {
            author,
            name,
            points,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the point sequence, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Appends a point at the end of the sequence.
    ///
    /// Always succeeds; coordinates are not range-checked.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Builds a blueprint with the same identity carrying `points` in place
    /// of this blueprint's own sequence.
    ///
    /// This is the constructor filters use: the source aggregate is left
    /// untouched and the result shares its `(author, name)` identity, which
    /// is already validated.
    pub fn with_sequence(&self, points: Vec<Point>) -> Self {
        Self {
            author: self.author.clone(),
            name: self.name.clone(),
            points,
        }
    }
}

impl PartialEq for Blueprint {
    fn eq(&self, other: &Self) -> bool {
        self.author == other.author && self.name == other.name
    }
}

impl Eq for Blueprint {}

impl Hash for Blueprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.author.hash(state);
        self.name.hash(state);
    }
}
