//! Startup configuration: store backend and filter selection.

use std::env;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use blueprints_core::FilterKind;

/// Store backend selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(format!(
                "unknown store backend: {other} (expected memory or postgres)"
            )),
        }
    }
}

/// Resolved startup configuration.
///
/// Environment variables:
/// - `BLUEPRINTS_STORE` - store backend, `memory` or `postgres` (default: memory)
/// - `BLUEPRINTS_FILTER` - read-time filter, `identity`, `redundancy` or
///   `undersampling` (default: identity)
/// - `DATABASE_URL` - Postgres connection string (postgres backend only)
///
/// Command-line flags override the environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub store: StoreBackend,
    pub filter: FilterKind,
    pub database_url: Option<String>,
}

impl CliConfig {
    /// Constructs configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(store) = read_env("BLUEPRINTS_STORE")? {
            config.store = store;
        }
        if let Some(filter) = read_env("BLUEPRINTS_FILTER")? {
            config.filter = filter;
        }
        config.database_url = env::var("DATABASE_URL").ok();

        Ok(config)
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        store: Option<StoreBackend>,
        filter: Option<FilterKind>,
        database_url: Option<String>,
    ) -> Self {
        if let Some(store) = store {
            self.store = store;
        }
        if let Some(filter) = filter {
            self.filter = filter;
        }
        if let Some(url) = database_url {
            self.database_url = Some(url);
        }
        self
    }
}

fn read_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|err| anyhow!("invalid {key}: {err}")),
        Err(_) => Ok(None),
    }
}
