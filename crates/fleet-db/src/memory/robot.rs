//! In-memory implementation of RobotRepository

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use fleet_core::entities::{Robot, StatusUpdate};
use fleet_core::error::DomainError;
use fleet_core::traits::{RepoResult, RobotRepository};
use fleet_core::value_objects::ApiKey;

use super::{MemoryStore, StoredRobot};

/// In-memory implementation of RobotRepository
#[derive(Clone)]
pub struct MemoryRobotRepository {
    store: Arc<MemoryStore>,
}

impl MemoryRobotRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RobotRepository for MemoryRobotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Robot>> {
        Ok(self.store.robots.read().get(id).map(|s| s.robot.clone()))
    }

    #[instrument(skip(self, robot, api_key), fields(robot_id = %robot.id))]
    async fn create(&self, robot: &Robot, api_key: &ApiKey) -> RepoResult<()> {
        match self.store.robots.write().entry(robot.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::RobotAlreadyExists(robot.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(StoredRobot {
                    robot: robot.clone(),
                    api_key: api_key.clone(),
                });
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<Robot>> {
        let mut robots: Vec<Robot> = self
            .store
            .robots
            .read()
            .values()
            .map(|s| s.robot.clone())
            .collect();

        robots.sort_by(|a, b| {
            Reverse(a.updated_at)
                .cmp(&Reverse(b.updated_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(robots
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        Ok(self.store.robots.read().len() as i64)
    }

    #[instrument(skip(self, update))]
    async fn apply_status_update(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> RepoResult<Option<Robot>> {
        let mut robots = self.store.robots.write();
        Ok(robots.get_mut(id).map(|stored| {
            stored.robot.apply(update);
            stored.robot.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn find_api_key(&self, id: &str) -> RepoResult<Option<ApiKey>> {
        Ok(self.store.robots.read().get(id).map(|s| s.api_key.clone()))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
