//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in fleet-core.

mod error;
mod log;
mod robot;

pub use log::PgLogRepository;
pub use robot::PgRobotRepository;
