//! In-memory implementation of LogRepository

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use fleet_core::entities::{LogEntry, NewLogEntry};
use fleet_core::traits::{LogRepository, RepoResult};

use super::MemoryStore;

/// In-memory implementation of LogRepository
#[derive(Clone)]
pub struct MemoryLogRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLogRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LogRepository for MemoryLogRepository {
    #[instrument(skip(self, entry), fields(robot_id = %entry.robot_id))]
    async fn append(&self, entry: NewLogEntry) -> RepoResult<LogEntry> {
        let mut table = self.store.logs.write();
        table.next_id += 1;
        let stored = entry.into_entry(table.next_id);
        table.entries.push(stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_robot(
        &self,
        robot_id: &str,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .store
            .logs
            .read()
            .entries
            .iter()
            .filter(|e| e.robot_id == robot_id)
            .cloned()
            .collect();

        entries.sort_by_key(|e| Reverse((e.created_at, e.id)));

        Ok(entries
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    #[instrument(skip(self))]
    async fn count_by_robot(&self, robot_id: &str) -> RepoResult<i64> {
        let table = self.store.logs.read();
        Ok(table.entries.iter().filter(|e| e.robot_id == robot_id).count() as i64)
    }
}
