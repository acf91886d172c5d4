//! Error taxonomy and HTTP status mapping.
//!
//! Every request handler returns `Result<_, ApiError>`, so all failures go
//! through one mapping layer instead of per-handler catch blocks. A failure
//! is never reported with a success status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// The failure modes of the service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A bad or expired authorization code, or a token the provider rejects.
    #[error("authorization failed: {0}")]
    Auth(String),

    /// A provider-side failure: 4xx/5xx, quota exhaustion, invalid id.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// A search or filter step produced no candidates.
    #[error("no matching video found for '{0}'")]
    NoMatch(String),

    /// A required query parameter is missing.
    #[error("missing required parameter '{0}'")]
    Validation(&'static str),
}

impl ApiError {
    /// Short machine-readable tag for the response body.
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Auth(_) => "auth",
            ApiError::Upstream(_) => "upstream",
            ApiError::NoMatch(_) => "no_match",
            ApiError::Validation(_) => "validation",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::NoMatch(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    /// Provider 401/403 means the caller's token was rejected; everything
    /// else (other statuses, transport failures, decode failures) is an
    /// upstream problem.
    fn from(err: reqwest::Error) -> Self {
        let rejected = err
            .status()
            .is_some_and(|s| s == StatusCode::UNAUTHORIZED || s == StatusCode::FORBIDDEN);
        if rejected {
            ApiError::Auth(err.to_string())
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}
