//! PostgreSQL implementation of LogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fleet_core::entities::{LogEntry, NewLogEntry};
use fleet_core::traits::{LogRepository, RepoResult};

use crate::mappers::LogInsert;
use crate::models::LogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LogRepository
#[derive(Clone)]
pub struct PgLogRepository {
    pool: PgPool,
}

impl PgLogRepository {
    /// Create a new PgLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogRepository for PgLogRepository {
    #[instrument(skip(self, entry), fields(robot_id = %entry.robot_id))]
    async fn append(&self, entry: NewLogEntry) -> RepoResult<LogEntry> {
        let insert = LogInsert::new(&entry);

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO robot_logs (robot_id, message, level, source, meta, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(insert.robot_id)
        .bind(insert.message)
        .bind(insert.level)
        .bind(insert.source)
        .bind(insert.meta)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entry.into_entry(id))
    }

    #[instrument(skip(self))]
    async fn find_by_robot(
        &self,
        robot_id: &str,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<LogEntry>> {
        let results = sqlx::query_as::<_, LogModel>(
            r#"
            SELECT id, robot_id, message, level, source, meta, created_at
            FROM robot_logs
            WHERE robot_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(robot_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(LogEntry::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_robot(&self, robot_id: &str) -> RepoResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM robot_logs WHERE robot_id = $1")
                .bind(robot_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}
