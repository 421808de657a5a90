//! Repository traits (ports)

mod repositories;

pub use repositories::{LogRepository, RepoResult, RobotRepository};
