//! Value objects - immutable types that represent domain concepts

mod api_key;
mod page;

pub use api_key::ApiKey;
pub use page::{Page, PageMeta, PageRequest};
