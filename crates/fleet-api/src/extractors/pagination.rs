//! Pagination extractor
//!
//! Extracts `page`/`limit` query parameters. Parsing is lenient: values that
//! are not integers are treated as absent, and the result is clamped by
//! [`PageRequest::new`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use fleet_core::PageRequest;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Clamped pagination request
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub PageRequest);

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let parse = |raw: Option<String>| raw.and_then(|v| v.trim().parse::<i64>().ok());
        Pagination(PageRequest::new(parse(params.page), parse(params.limit)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}
