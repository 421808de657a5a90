//! Service context - dependency container for services
//!
//! Holds the repositories (and the database pool, when one backs them).

use std::sync::Arc;

use fleet_core::traits::{LogRepository, RobotRepository};
use fleet_db::{
    MemoryLogRepository, MemoryRobotRepository, MemoryStore, PgLogRepository, PgPool,
    PgRobotRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are injected as trait objects so the same services run on
/// PostgreSQL in production and on the memory store in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent for the memory backend
    pool: Option<PgPool>,

    // Repositories
    robot_repo: Arc<dyn RobotRepository>,
    log_repo: Arc<dyn LogRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        robot_repo: Arc<dyn RobotRepository>,
        log_repo: Arc<dyn LogRepository>,
    ) -> Self {
        Self {
            pool,
            robot_repo,
            log_repo,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgRobotRepository::new(pool.clone())),
            Arc::new(PgLogRepository::new(pool)),
        )
    }

    /// Context backed by a fresh in-process store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            None,
            Arc::new(MemoryRobotRepository::new(Arc::clone(&store))),
            Arc::new(MemoryLogRepository::new(store)),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context has one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the robot repository
    pub fn robot_repo(&self) -> &dyn RobotRepository {
        self.robot_repo.as_ref()
    }

    /// Get the log repository
    pub fn log_repo(&self) -> &dyn LogRepository {
        self.log_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    robot_repo: Option<Arc<dyn RobotRepository>>,
    log_repo: Option<Arc<dyn LogRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn robot_repo(mut self, repo: Arc<dyn RobotRepository>) -> Self {
        self.robot_repo = Some(repo);
        self
    }

    pub fn log_repo(mut self, repo: Arc<dyn LogRepository>) -> Self {
        self.log_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.robot_repo
                .ok_or_else(|| ServiceError::internal("robot_repo is required"))?,
            self.log_repo
                .ok_or_else(|| ServiceError::internal("log_repo is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_repositories() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_builder_with_memory_repositories() {
        let store = Arc::new(MemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .robot_repo(Arc::new(MemoryRobotRepository::new(Arc::clone(&store))))
            .log_repo(Arc::new(MemoryLogRepository::new(store)))
            .build()
            .unwrap();
        assert!(ctx.pool().is_none());
    }
}
