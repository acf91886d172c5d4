use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{config, error::ApiError};

const ACCOUNTS_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Scopes needed to read the user's private profile and playlists.
const SCOPE: &str = "user-read-private playlist-read-private";

/// Builds the Spotify authorization URL the caller should open in a browser.
///
/// Plain authorization-code flow: `response_type=code` with the configured
/// client id and redirect URI and the fixed read scopes. No side effects
/// beyond URL construction.
pub fn authorize_url() -> String {
    format!(
        "{ACCOUNTS_AUTHORIZE_URL}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
        client_id = urlencoding::encode(&config::spotify_client_id()),
        scope = urlencoding::encode(SCOPE),
        redirect_uri = urlencoding::encode(&config::spotify_redirect_uri()),
    )
}

/// Exchanges an authorization code for a token payload.
///
/// POSTs to the Accounts token endpoint with the client id and secret in an
/// HTTP Basic auth header. The token payload is returned verbatim so the
/// caller sees exactly what Spotify granted (access token, refresh token,
/// scope, expiry).
///
/// # Errors
///
/// Returns [`ApiError::Auth`] when Spotify rejects the code (invalid,
/// expired, or redirect mismatch) and [`ApiError::Upstream`] on transport
/// failures.
pub async fn exchange_code(code: &str) -> Result<Value, ApiError> {
    let credentials = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );

    let client = Client::new();
    let res = client
        .post(ACCOUNTS_TOKEN_URL)
        .header(
            reqwest::header::AUTHORIZATION,
            format!("Basic {}", STANDARD.encode(credentials)),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let detail = res.text().await.unwrap_or_default();
        return Err(ApiError::Auth(format!(
            "Spotify rejected the authorization code: {detail}"
        )));
    }

    Ok(res.json().await?)
}
