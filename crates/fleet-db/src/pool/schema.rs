//! Idempotent schema bootstrap
//!
//! Creates the two tables the registry needs if they are missing. Existing
//! tables are left as they are.

use sqlx::PgPool;
use tracing::{info, instrument};

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS robots (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        type        TEXT NOT NULL CHECK (type IN ('AMR', 'Drone', 'Arm')),
        status      TEXT NOT NULL DEFAULT 'idle'
                    CHECK (status IN ('idle', 'active', 'charging', 'error')),
        battery     DOUBLE PRECISION CHECK (battery >= 0 AND battery <= 100),
        location    JSONB,
        error       TEXT,
        api_key     TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS robot_logs (
        id          BIGSERIAL PRIMARY KEY,
        robot_id    TEXT NOT NULL,
        message     TEXT NOT NULL,
        level       TEXT NOT NULL CHECK (level IN ('info', 'warn', 'error')),
        source      TEXT NOT NULL
                    CHECK (source IN ('robot', 'manual', 'system', 'operator')),
        meta        JSONB,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_robot_logs_robot_created
        ON robot_logs (robot_id, created_at DESC, id DESC)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_robots_updated
        ON robots (updated_at DESC, id)
    "#,
];

/// Create tables and indexes if they do not exist yet
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema ready");
    Ok(())
}
