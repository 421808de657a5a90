//! Axum extractors for request handling
//!
//! Custom extractors for the API-key guard, JSON bodies and pagination.

mod api_key;
mod pagination;
mod validated;

pub use api_key::{AuthenticatedRobot, XApiKey, API_KEY_HEADER};
pub use pagination::{Pagination, PaginationParams};
pub use validated::{JsonBody, ValidatedJson};
