use std::collections::HashMap;

use axum::{extract::Query, response::Json};
use serde_json::Value;

use crate::{error::ApiError, spotify, youtube};

use super::require;

/// `GET /login` — returns the Google OAuth authorization URL as plain text.
pub async fn login() -> String {
    youtube::auth::authorize_url()
}

/// `GET /callback?code=...` — exchanges the Google authorization code and
/// returns the access token string.
pub async fn google_callback(
    Query(params): Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let code = require(&params, "code")?;
    let tokens = youtube::auth::exchange_code(code).await?;
    Ok(tokens.access_token)
}

/// `GET /spotify-login` — returns the Spotify authorization URL as plain text.
pub async fn spotify_login() -> String {
    spotify::auth::authorize_url()
}

/// `GET /callbackSpotify?code=...` — exchanges the Spotify authorization
/// code and returns the token payload verbatim.
pub async fn spotify_callback(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let code = require(&params, "code")?;
    let payload = spotify::auth::exchange_code(code).await?;
    Ok(Json(payload))
}
