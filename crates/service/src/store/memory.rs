//! In-memory BlueprintStore implementation for tests and local runs.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use blueprints_core::{Blueprint, Point};

use super::error::{Result, StoreError};
use super::traits::BlueprintStore;

type IdentityKey = (String, String);

/// In-memory implementation of [`BlueprintStore`].
///
/// Blueprints live in an identity-keyed map behind a single coarse
/// [`RwLock`]; readers clone full aggregates out, so no caller ever observes
/// a partially written blueprint. Intended for development and tests.
pub struct MemoryStore {
    blueprints: RwLock<HashMap<IdentityKey, Blueprint>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            blueprints: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-seeded with the fixed dev/test dataset:
    /// `john/house`, `john/garage`, `jane/garden`.
    pub fn with_starter_data() -> Self {
        let mut blueprints = HashMap::new();
        for blueprint in starter_data() {
            let key = (
                blueprint.author().to_owned(),
                blueprint.name().to_owned(),
            );
            blueprints.insert(key, blueprint);
        }
        Self {
            blueprints: RwLock::new(blueprints),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlueprintStore for MemoryStore {
    async fn save(&self, blueprint: &Blueprint) -> Result<()> {
        let mut blueprints = self
            .blueprints
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        let key = (
            blueprint.author().to_owned(),
            blueprint.name().to_owned(),
        );
        if blueprints.contains_key(&key) {
            return Err(StoreError::already_exists(
                blueprint.author(),
                blueprint.name(),
            ));
        }

        blueprints.insert(key, blueprint.clone());
        Ok(())
    }

    async fn get_one(&self, author: &str, name: &str) -> Result<Blueprint> {
        let blueprints = self
            .blueprints
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        blueprints
            .get(&(author.to_owned(), name.to_owned()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(author, name))
    }

    async fn get_by_author(&self, author: &str) -> Result<HashSet<Blueprint>> {
        let blueprints = self
            .blueprints
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        let matches: HashSet<Blueprint> = blueprints
            .values()
            .filter(|bp| bp.author() == author)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(StoreError::author_not_found(author));
        }
        Ok(matches)
    }

    async fn get_all(&self) -> Result<HashSet<Blueprint>> {
        let blueprints = self
            .blueprints
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        Ok(blueprints.values().cloned().collect())
    }

    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()> {
        let mut blueprints = self
            .blueprints
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        let blueprint = blueprints
            .get_mut(&(author.to_owned(), name.to_owned()))
            .ok_or_else(|| StoreError::not_found(author, name))?;

        blueprint.append_point(point);
        Ok(())
    }
}

/// Fixed starter dataset seeded by [`MemoryStore::with_starter_data`].
fn starter_data() -> Vec<Blueprint> {
    let seed = [
        (
            "john",
            "house",
            vec![
                Point::new(140, 140),
                Point::new(115, 115),
                Point::new(115, 175),
                Point::new(140, 175),
            ],
        ),
        (
            "john",
            "garage",
            vec![
                Point::new(0, 0),
                Point::new(40, 0),
                Point::new(40, 30),
                Point::new(0, 30),
            ],
        ),
        (
            "jane",
            "garden",
            vec![Point::new(10, 10), Point::new(20, 20), Point::new(30, 10)],
        ),
    ];

    seed.into_iter()
        .map(|(author, name, points)| {
            Blueprint::with_points(author, name, points)
                .expect("starter identities are non-empty")
        })
        .collect()
}
