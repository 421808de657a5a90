//! API-key guard
//!
//! Binds a request to one robot: the identity comes from the `:id` path
//! segment, the secret from the `x-api-key` header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{
    headers::{self, Header},
    TypedHeader,
};
use fleet_service::{dto::RobotResponse, AuthService};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying a robot's API key
pub const API_KEY_HEADER: &str = "x-api-key";

static X_API_KEY: HeaderName = HeaderName::from_static(API_KEY_HEADER);

/// Typed `x-api-key` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XApiKey(pub String);

impl Header for XApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        // Opaque bytes still decode; they simply never match a stored key
        Ok(Self(String::from_utf8_lossy(value.as_bytes()).into_owned()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Robot authenticated by its API key; holds the public view (no secret)
#[derive(Debug, Clone)]
pub struct AuthenticatedRobot(pub RobotResponse);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedRobot
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let robot_id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|Path(id)| id);

        let api_key = TypedHeader::<XApiKey>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(XApiKey(key))| key);

        let app_state = AppState::from_ref(state);
        let robot = AuthService::new(app_state.service_context())
            .authenticate(robot_id.as_deref(), api_key.as_deref())
            .await?;

        Ok(AuthenticatedRobot(robot))
    }
}
