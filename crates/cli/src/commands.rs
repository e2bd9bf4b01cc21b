//! Subcommand definitions and execution against the service.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use blueprints_core::{Blueprint, FilterKind, Point};
use blueprints_service::{BlueprintService, BlueprintStore, MemoryStore};
use clap::{Parser, Subcommand};

use crate::config::{CliConfig, StoreBackend};

/// Manage architectural blueprints from the command line.
#[derive(Debug, Parser)]
#[command(name = "blueprints", version, about)]
pub struct Cli {
    /// Store backend: memory | postgres (env: BLUEPRINTS_STORE)
    #[arg(long, global = true)]
    store: Option<StoreBackend>,

    /// Read-time filter: identity | redundancy | undersampling
    /// (env: BLUEPRINTS_FILTER)
    #[arg(long, global = true)]
    filter: Option<FilterKind>,

    /// Postgres connection string (env: DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all blueprints.
    List,

    /// List every blueprint by one author.
    Author { author: String },

    /// Show a single blueprint.
    Get { author: String, name: String },

    /// Create a new blueprint; points are `x,y` pairs.
    Add {
        author: String,
        name: String,
        #[arg(value_parser = parse_point)]
        points: Vec<Point>,
    },

    /// Append one point to an existing blueprint.
    AddPoint {
        author: String,
        name: String,
        x: i32,
        y: i32,
    },
}

/// Executes the parsed invocation.
pub async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::from_env()?.with_overrides(cli.store, cli.filter, cli.database_url);
    tracing::debug!(?config, "resolved startup configuration");

    let store = build_store(&config).await?;
    let service = BlueprintService::builder()
        .shared_store(store)
        .filter(config.filter)
        .build()?;

    match cli.command {
        Command::List => {
            let blueprints = service.get_all_blueprints().await?;
            print_blueprints(blueprints)?;
        }
        Command::Author { author } => {
            let blueprints = service.get_blueprints_by_author(&author).await?;
            print_blueprints(blueprints)?;
        }
        Command::Get { author, name } => {
            let blueprint = service.get_blueprint(&author, &name).await?;
            println!("{}", serde_json::to_string_pretty(&blueprint)?);
        }
        Command::Add {
            author,
            name,
            points,
        } => {
            let blueprint = Blueprint::with_points(author, name, points)?;
            let identity = format!("{}/{}", blueprint.author(), blueprint.name());
            service.add_new_blueprint(blueprint).await?;
            println!("created {identity}");
        }
        Command::AddPoint { author, name, x, y } => {
            service.add_point(&author, &name, x, y).await?;
            println!("appended ({x}, {y}) to {author}/{name}");
        }
    }

    Ok(())
}

async fn build_store(config: &CliConfig) -> Result<Arc<dyn BlueprintStore>> {
    match config.store {
        // The in-memory backend is per-process; start it seeded so read
        // commands have data to serve.
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::with_starter_data())),
        StoreBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &CliConfig) -> Result<Arc<dyn BlueprintStore>> {
    use anyhow::Context;

    let url = config
        .database_url
        .as_deref()
        .context("the postgres backend requires DATABASE_URL or --database-url")?;
    let store = blueprints_service::PgStore::connect(url).await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &CliConfig) -> Result<Arc<dyn BlueprintStore>> {
    anyhow::bail!("this binary was built without the postgres feature")
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y - got {raw}"))?;
    let x = x.trim().parse().map_err(|err| format!("invalid x in {raw}: {err}"))?;
    let y = y.trim().parse().map_err(|err| format!("invalid y in {raw}: {err}"))?;
    Ok(Point::new(x, y))
}

fn print_blueprints(blueprints: HashSet<Blueprint>) -> Result<()> {
    let mut blueprints: Vec<Blueprint> = blueprints.into_iter().collect();
    blueprints.sort_by(|a, b| (a.author(), a.name()).cmp(&(b.author(), b.name())));
    println!("{}", serde_json::to_string_pretty(&blueprints)?);
    Ok(())
}
