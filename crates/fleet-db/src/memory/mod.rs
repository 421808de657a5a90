//! In-process repository implementations
//!
//! Both repositories share one [`MemoryStore`]. Every mutation takes the
//! relevant write lock exactly once, which gives the same atomicity the
//! PostgreSQL adapter gets from single statements.

mod log;
mod robot;

use std::collections::HashMap;

use fleet_core::entities::{LogEntry, Robot};
use fleet_core::value_objects::ApiKey;
use parking_lot::RwLock;

pub use log::MemoryLogRepository;
pub use robot::MemoryRobotRepository;

/// Robot row as held by the memory store
#[derive(Debug, Clone)]
struct StoredRobot {
    robot: Robot,
    api_key: ApiKey,
}

/// Append-only log table with its id sequence
#[derive(Debug, Default)]
struct LogTable {
    next_id: i64,
    entries: Vec<LogEntry>,
}

/// Shared backing state for the memory repositories
#[derive(Debug, Default)]
pub struct MemoryStore {
    robots: RwLock<HashMap<String, StoredRobot>>,
    logs: RwLock<LogTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
