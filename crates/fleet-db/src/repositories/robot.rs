//! PostgreSQL implementation of RobotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fleet_core::entities::{Robot, StatusUpdate};
use fleet_core::traits::{RepoResult, RobotRepository};
use fleet_core::value_objects::ApiKey;

use crate::mappers::{RobotInsert, StatusUpdateParams};
use crate::models::RobotModel;

use super::error::{map_db_error, map_unique_violation, robot_exists};

/// Public robot columns; `api_key` is only ever read by `find_api_key`
const ROBOT_COLUMNS: &str =
    "id, name, type, status, battery, location, error, created_at, updated_at";

/// PostgreSQL implementation of RobotRepository
#[derive(Clone)]
pub struct PgRobotRepository {
    pool: PgPool,
}

impl PgRobotRepository {
    /// Create a new PgRobotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RobotRepository for PgRobotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Robot>> {
        let result = sqlx::query_as::<_, RobotModel>(&format!(
            "SELECT {ROBOT_COLUMNS} FROM robots WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Robot::try_from).transpose()
    }

    #[instrument(skip(self, robot, api_key), fields(robot_id = %robot.id))]
    async fn create(&self, robot: &Robot, api_key: &ApiKey) -> RepoResult<()> {
        let insert = RobotInsert::new(robot, api_key);

        // The primary key makes this an atomic insert-if-absent
        sqlx::query(
            r#"
            INSERT INTO robots (id, name, type, status, battery, location, error, api_key, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.robot_type)
        .bind(insert.status)
        .bind(insert.battery)
        .bind(insert.location)
        .bind(insert.error)
        .bind(insert.api_key)
        .bind(robot.created_at)
        .bind(robot.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || robot_exists(&robot.id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<Robot>> {
        let results = sqlx::query_as::<_, RobotModel>(&format!(
            r#"
            SELECT {ROBOT_COLUMNS}
            FROM robots
            ORDER BY updated_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Robot::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM robots")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, update))]
    async fn apply_status_update(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> RepoResult<Option<Robot>> {
        let params = StatusUpdateParams::new(update);

        // Single statement, so concurrent updates never interleave field by field
        let result = sqlx::query_as::<_, RobotModel>(&format!(
            r#"
            UPDATE robots
            SET battery = COALESCE($2, battery),
                location = CASE WHEN $3 THEN $4 ELSE location END,
                status = COALESCE($5, status),
                error = CASE WHEN $6 THEN $7 ELSE error END,
                updated_at = $8
            WHERE id = $1
            RETURNING {ROBOT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.battery)
        .bind(params.set_location)
        .bind(params.location)
        .bind(params.status)
        .bind(params.set_error)
        .bind(params.error)
        .bind(params.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Robot::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_api_key(&self, id: &str) -> RepoResult<Option<ApiKey>> {
        let result: Option<(String,)> = sqlx::query_as("SELECT api_key FROM robots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|(key,)| ApiKey::from_stored(key)))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
