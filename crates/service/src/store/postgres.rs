//! Postgres-backed BlueprintStore implementation.
//!
//! Schema: one `blueprints` parent row per identity with a unique constraint
//! over `(author, name)`, and one `blueprint_points` child row per point
//! carrying a `point_order` column so sequence order round-trips exactly.
//! Each logical operation runs inside a single transaction, keeping the
//! uniqueness check and the write atomic.

use std::collections::HashSet;

use async_trait::async_trait;
use blueprints_core::{Blueprint, Point};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::error::{Result, StoreError};
use super::traits::BlueprintStore;

const SELECT_ONE: &str = "SELECT b.author, b.name, p.x, p.y \
     FROM blueprints b \
     LEFT JOIN blueprint_points p ON p.blueprint_id = b.id \
     WHERE b.author = $1 AND b.name = $2 \
     ORDER BY p.point_order";

const SELECT_BY_AUTHOR: &str = "SELECT b.author, b.name, p.x, p.y \
     FROM blueprints b \
     LEFT JOIN blueprint_points p ON p.blueprint_id = b.id \
     WHERE b.author = $1 \
     ORDER BY b.id, p.point_order";

const SELECT_ALL: &str = "SELECT b.author, b.name, p.x, p.y \
     FROM blueprints b \
     LEFT JOIN blueprint_points p ON p.blueprint_id = b.id \
     ORDER BY b.id, p.point_order";

/// Relational implementation of [`BlueprintStore`].
///
/// Concurrency and isolation are delegated to Postgres; the unique
/// constraint over `(author, name)` is the single authority on identity
/// collisions.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing connection pool. Assumes migrations have run.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `url` and applies pending migrations.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl BlueprintStore for PgStore {
    async fn save(&self, blueprint: &Blueprint) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // The unique constraint decides the conflict: no row back means the
        // identity is already taken.
        let inserted: Option<(i64,)> = sqlx::query_as(
            "INSERT INTO blueprints (author, name) VALUES ($1, $2) \
             ON CONFLICT (author, name) DO NOTHING \
             RETURNING id",
        )
        .bind(blueprint.author())
        .bind(blueprint.name())
        .fetch_optional(&mut *tx)
        .await?;

        let Some((blueprint_id,)) = inserted else {
            return Err(StoreError::already_exists(
                blueprint.author(),
                blueprint.name(),
            ));
        };

        for (order, point) in blueprint.points().iter().enumerate() {
            sqlx::query(
                "INSERT INTO blueprint_points (blueprint_id, point_order, x, y) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(blueprint_id)
            .bind(order as i32)
            .bind(point.x)
            .bind(point.y)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_one(&self, author: &str, name: &str) -> Result<Blueprint> {
        let rows = sqlx::query(SELECT_ONE)
            .bind(author)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Err(StoreError::not_found(author, name));
        }

        let parts = rows.iter().map(row_parts).collect::<Result<Vec<_>>>()?;
        fold_rows(parts)?
            .pop()
            .ok_or_else(|| StoreError::not_found(author, name))
    }

    async fn get_by_author(&self, author: &str) -> Result<HashSet<Blueprint>> {
        let rows = sqlx::query(SELECT_BY_AUTHOR)
            .bind(author)
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Err(StoreError::author_not_found(author));
        }

        let parts = rows.iter().map(row_parts).collect::<Result<Vec<_>>>()?;
        Ok(fold_rows(parts)?.into_iter().collect())
    }

    async fn get_all(&self) -> Result<HashSet<Blueprint>> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;

        let parts = rows.iter().map(row_parts).collect::<Result<Vec<_>>>()?;
        Ok(fold_rows(parts)?.into_iter().collect())
    }

    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Lock the parent row so concurrent appends to the same blueprint
        // serialize on the next point_order value.
        let parent: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM blueprints WHERE author = $1 AND name = $2 FOR UPDATE",
        )
        .bind(author)
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((blueprint_id,)) = parent else {
            return Err(StoreError::not_found(author, name));
        };

        sqlx::query(
            "INSERT INTO blueprint_points (blueprint_id, point_order, x, y) \
             SELECT $1, COALESCE(MAX(point_order) + 1, 0), $2, $3 \
             FROM blueprint_points WHERE blueprint_id = $1",
        )
        .bind(blueprint_id)
        .bind(point.x)
        .bind(point.y)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// One joined result row: identity plus an optional point. Coordinates are
/// NULL for identities that have no points yet.
type BlueprintRow = (String, String, Option<i32>, Option<i32>);

fn row_parts(row: &PgRow) -> Result<BlueprintRow> {
    Ok((
        row.try_get("author")?,
        row.try_get("name")?,
        row.try_get("x")?,
        row.try_get("y")?,
    ))
}

/// Folds joined rows (grouped by identity, points in `point_order`) back
/// into aggregates.
fn fold_rows(rows: Vec<BlueprintRow>) -> Result<Vec<Blueprint>> {
    let mut blueprints: Vec<Blueprint> = Vec::new();

    for (author, name, x, y) in rows {
        let point = match (x, y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            (None, None) => None,
            _ => {
                return Err(StoreError::Corrupted(format!(
                    "point row for {author}/{name} has a lone coordinate"
                )));
            }
        };

        let starts_new_group = blueprints.last().is_none_or(|current| {
            current.author() != author.as_str() || current.name() != name.as_str()
        });
        if starts_new_group {
            let blueprint = Blueprint::new(author, name)
                .map_err(|err| StoreError::Corrupted(err.to_string()))?;
            blueprints.push(blueprint);
        }

        if let (Some(point), Some(current)) = (point, blueprints.last_mut()) {
            current.append_point(point);
        }
    }

    Ok(blueprints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(author: &str, name: &str, x: Option<i32>, y: Option<i32>) -> BlueprintRow {
        (author.to_owned(), name.to_owned(), x, y)
    }

    #[test]
    fn folds_contiguous_rows_into_ordered_aggregates() {
        let rows = vec![
            row("john", "house", Some(140), Some(140)),
            row("john", "house", Some(115), Some(115)),
            row("john", "garage", Some(0), Some(0)),
        ];

        let blueprints = fold_rows(rows).unwrap();

        assert_eq!(blueprints.len(), 2);
        assert_eq!(
            blueprints[0].points(),
            &[Point::new(140, 140), Point::new(115, 115)]
        );
        assert_eq!(blueprints[1].name(), "garage");
        assert_eq!(blueprints[1].points(), &[Point::new(0, 0)]);
    }

    #[test]
    fn keeps_pointless_blueprints_with_empty_sequences() {
        let rows = vec![row("jane", "garden", None, None)];

        let blueprints = fold_rows(rows).unwrap();

        assert_eq!(blueprints.len(), 1);
        assert!(blueprints[0].points().is_empty());
    }

    #[test]
    fn rejects_a_lone_coordinate() {
        let rows = vec![row("jane", "garden", Some(1), None)];

        assert!(matches!(
            fold_rows(rows).unwrap_err(),
            StoreError::Corrupted(_)
        ));
    }

    #[test]
    fn rejects_an_empty_identity_column() {
        let rows = vec![row("", "garden", None, None)];

        assert!(matches!(
            fold_rows(rows).unwrap_err(),
            StoreError::Corrupted(_)
        ));
    }
}
