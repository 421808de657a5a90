//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of
//! one request.

pub mod auth;
pub mod context;
pub mod error;
pub mod log;
pub mod robot;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use log::LogService;
pub use robot::RobotService;
