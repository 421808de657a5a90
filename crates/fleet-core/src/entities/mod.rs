//! Domain entities - core business objects

mod log_entry;
mod robot;

pub use log_entry::{LogEntry, LogLevel, LogSource, NewLogEntry};
pub use robot::{Robot, RobotStatus, RobotType, StatusUpdate};
