//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the document store, and the
//! infrastructure layer (PostgreSQL, in-memory) provides the implementation.

use async_trait::async_trait;

use crate::entities::{LogEntry, NewLogEntry, Robot, StatusUpdate};
use crate::error::DomainError;
use crate::value_objects::ApiKey;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Robot Repository
// ============================================================================

#[async_trait]
pub trait RobotRepository: Send + Sync {
    /// Find robot by ID (never loads the API key)
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Robot>>;

    /// Insert a new robot with its API key.
    ///
    /// Must be an atomic insert-if-absent: a duplicate id fails with
    /// `DomainError::RobotAlreadyExists` and leaves the stored robot untouched.
    async fn create(&self, robot: &Robot, api_key: &ApiKey) -> RepoResult<()>;

    /// List robots, most recently updated first
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<Robot>>;

    /// Total number of robots
    async fn count(&self) -> RepoResult<i64>;

    /// Apply a partial status update and return the new state, or `None` if the robot is absent
    async fn apply_status_update(&self, id: &str, update: &StatusUpdate)
        -> RepoResult<Option<Robot>>;

    /// Load the stored API key for authentication
    async fn find_api_key(&self, id: &str) -> RepoResult<Option<ApiKey>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Log Repository
// ============================================================================

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Append an entry; storage assigns the id
    async fn append(&self, entry: NewLogEntry) -> RepoResult<LogEntry>;

    /// List a robot's entries, newest first
    async fn find_by_robot(&self, robot_id: &str, offset: i64, limit: i64)
        -> RepoResult<Vec<LogEntry>>;

    /// Number of entries for a robot
    async fn count_by_robot(&self, robot_id: &str) -> RepoResult<i64>;
}
