//! # fleet-db
//!
//! Persistence adapters implementing the repository traits from `fleet-core`.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, schema bootstrap, row models,
//!   entity mappers and the `Pg*Repository` implementations
//! - An in-process store (`Memory*Repository`) with the same contract, used
//!   for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fleet_db::pool::{create_pool, ensure_schema, PoolConfig};
//! use fleet_db::repositories::PgRobotRepository;
//! use fleet_core::traits::RobotRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let robots = PgRobotRepository::new(pool);
//!
//!     let total = robots.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryLogRepository, MemoryRobotRepository, MemoryStore};
pub use pool::{create_pool, ensure_schema, PgPool, PoolConfig};
pub use repositories::{PgLogRepository, PgRobotRepository};
