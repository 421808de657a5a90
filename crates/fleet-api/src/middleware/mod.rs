//! Middleware stack for the API server
//!
//! Request ids, tracing, timeout, compression, CORS and global rate limiting,
//! plus the mapping that gives layer-generated errors the API error body.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use fleet_common::{AppConfig, AppError, AppResult, CorsConfig};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::extractors::API_KEY_HEADER;
use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the middleware stack configured from `config`
///
/// Order on the way in: rate limit, request id, trace, timeout, compression, CORS.
pub fn apply_middleware(
    router: Router<AppState>,
    config: &AppConfig,
) -> AppResult<Router<AppState>> {
    let limits = &config.rate_limit;
    // The quota is expressed as the period after which one request is replenished
    let period_ms = (1000 / u64::from(limits.requests_per_second.max(1))).max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(period_ms)
            .burst_size(limits.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| {
                AppError::Config(format!(
                    "invalid rate limit: {} req/s, burst {}",
                    limits.requests_per_second, limits.burst
                ))
            })?,
    );
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(router
        .layer(create_cors_layer(&config.cors, config.app.env.is_production()))
        .layer(CompressionLayer::new())
        // Returns 503 Service Unavailable on timeout
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            config.api.request_timeout(),
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get(REQUEST_ID_HEADER)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("unknown");

                            tracing::info_span!(
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id,
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        // Global (not per-IP) rate limiting, outermost
        .layer(GovernorLayer {
            config: governor_conf,
        }))
}

/// Rewrite bare error responses produced by layers and the router
///
/// The limiter (429), the timeout (503) and method mismatches (405) answer
/// without the JSON error body. Responses that already carry JSON pass through.
pub async fn normalize_error_response(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let err = match response.status() {
        StatusCode::TOO_MANY_REQUESTS => ApiError::App(AppError::RateLimitExceeded),
        StatusCode::SERVICE_UNAVAILABLE => {
            ApiError::App(AppError::Unavailable("Request timed out".to_string()))
        }
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        _ => return response,
    };

    // Keep headers such as Allow, Retry-After and the request id
    let (parts, _) = response.into_parts();
    let mut mapped = err.into_response();
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            mapped.headers_mut().append(name.clone(), value.clone());
        }
    }
    mapped
}

/// Create CORS layer from configuration
///
/// An empty origin list allows any origin outside production and none in it.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(API_KEY_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    if config.allowed_origins.is_empty() {
        if is_production {
            warn!("CORS: No allowed origins configured in production mode, cross-origin requests will be blocked");
            return base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
        }
        warn!("CORS: Allowing any origin; set CORS_ALLOWED_ORIGINS to restrict");
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    info!(count = origins.len(), "CORS: Allowing configured origins");
    base_layer.allow_origin(AllowOrigin::list(origins))
}
