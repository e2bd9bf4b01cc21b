//! Orchestration layer composing one store with one filter.
//!
//! [`BlueprintService`] is the composition point external boundaries call
//! into: every read runs the active filter over each blueprint the store
//! returns, while writes pass through raw. The stored representation is
//! therefore always the unfiltered truth, and the filtered view is
//! recomputed on every read. Switching the active filter therefore never
//! requires a data migration and never loses information.

use std::collections::HashSet;
use std::sync::Arc;

use blueprints_core::{Blueprint, BlueprintFilter, FilterKind, Point};
use tracing::{debug, warn};

use crate::error::{Result, ServiceError};
use crate::store::{BlueprintStore, StoreError};

/// Orchestrator over one [`BlueprintStore`] and one [`BlueprintFilter`].
///
/// Both collaborators are injected at construction through
/// [`builder`](Self::builder) and fixed for the lifetime of the instance.
pub struct BlueprintService {
    store: Arc<dyn BlueprintStore>,
    filter: Box<dyn BlueprintFilter>,
}

impl std::fmt::Debug for BlueprintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlueprintService").finish_non_exhaustive()
    }
}

impl BlueprintService {
    /// Creates a new service builder.
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::new()
    }

    /// Returns all blueprints, each passed through the active filter.
    ///
    /// Never fails on an empty store; the result set is simply empty.
    pub async fn get_all_blueprints(&self) -> Result<HashSet<Blueprint>> {
        let blueprints = self.store.get_all().await?;
        debug!(count = blueprints.len(), "serving all blueprints");
        Ok(blueprints.iter().map(|bp| self.filter.apply(bp)).collect())
    }

    /// Returns the author's blueprints, each passed through the active
    /// filter. Propagates the store's not-found miss when the author has
    /// zero blueprints.
    pub async fn get_blueprints_by_author(&self, author: &str) -> Result<HashSet<Blueprint>> {
        let blueprints = self.store.get_by_author(author).await?;
        debug!(author, count = blueprints.len(), "serving blueprints by author");
        Ok(blueprints.iter().map(|bp| self.filter.apply(bp)).collect())
    }

    /// Returns one blueprint, passed through the active filter once.
    /// Propagates the store's not-found miss.
    pub async fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint> {
        let blueprint = self.store.get_one(author, name).await?;
        Ok(self.filter.apply(&blueprint))
    }

    /// Stores a new blueprint verbatim. The filter is NOT applied on writes.
    ///
    /// Propagates `AlreadyExists` on an identity collision; there is no
    /// overwrite-on-conflict fallback.
    pub async fn add_new_blueprint(&self, blueprint: Blueprint) -> Result<()> {
        debug!(
            author = blueprint.author(),
            name = blueprint.name(),
            points = blueprint.points().len(),
            "saving blueprint"
        );

        match self.store.save(&blueprint).await {
            Ok(()) => Ok(()),
            Err(err @ StoreError::AlreadyExists { .. }) => {
                warn!(
                    author = blueprint.author(),
                    name = blueprint.name(),
                    "rejected save of an existing identity"
                );
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Appends a raw point to a stored blueprint. Filtering is never applied
    /// on this path either; what gets stored is exactly `(x, y)`.
    ///
    /// Propagates the store's not-found miss.
    pub async fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()> {
        self.store.append_point(author, name, Point::new(x, y)).await?;
        Ok(())
    }
}

/// Builder for [`BlueprintService`].
///
/// A store is required; the filter defaults to [`FilterKind::Identity`].
/// The filter choice is an enumerated, construction-time decision; there
/// is no runtime switching.
pub struct ServiceBuilder {
    store: Option<Arc<dyn BlueprintStore>>,
    filter: FilterKind,
}

impl ServiceBuilder {
    fn new() -> Self {
        Self {
            store: None,
            filter: FilterKind::default(),
        }
    }

    /// Sets the backing store.
    pub fn store(mut self, store: impl BlueprintStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Sets an already-shared store, for callers that keep their own handle
    /// to it.
    pub fn shared_store(mut self, store: Arc<dyn BlueprintStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Selects the read-time filter variant.
    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = kind;
        self
    }

    /// Builds the service.
    pub fn build(self) -> Result<BlueprintService> {
        let store = self.store.ok_or(ServiceError::MissingStore)?;
        Ok(BlueprintService {
            store,
            filter: self.filter.instantiate(),
        })
    }
}
