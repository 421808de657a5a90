//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects,
//!   rejecting enum values the domain does not know
//! - `*Insert`/`*Params` structs: prepare entity data for database operations

mod log;
mod robot;

pub use log::LogInsert;
pub use robot::{RobotInsert, StatusUpdateParams};
