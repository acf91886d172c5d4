use reqwest::Client;

use crate::{config, error::ApiError, types::GoogleTokens};

const OAUTH_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Full management scope for the caller's YouTube account.
const SCOPE: &str = "https://www.googleapis.com/auth/youtube";

/// Builds the Google authorization URL for the YouTube scope.
///
/// Requests `access_type=offline` so the token exchange also yields a
/// refresh token. Pure URL construction, no side effects.
pub fn authorize_url() -> String {
    format!(
        "{OAUTH_AUTHORIZE_URL}?client_id={client_id}&redirect_uri={redirect_uri}&response_type=code&scope={scope}&access_type=offline",
        client_id = urlencoding::encode(&config::google_client_id()),
        redirect_uri = urlencoding::encode(&config::google_redirect_uri()),
        scope = urlencoding::encode(SCOPE),
    )
}

/// Exchanges an authorization code for access and refresh tokens.
///
/// # Errors
///
/// Returns [`ApiError::Auth`] when Google reports the code as invalid or
/// expired, [`ApiError::Upstream`] on transport failures.
pub async fn exchange_code(code: &str) -> Result<GoogleTokens, ApiError> {
    let client = Client::new();
    let res = client
        .post(OAUTH_TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", &config::google_client_id()),
            ("client_secret", &config::google_client_secret()),
            ("redirect_uri", &config::google_redirect_uri()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let detail = res.text().await.unwrap_or_default();
        return Err(ApiError::Auth(format!(
            "Google rejected the authorization code: {detail}"
        )));
    }

    Ok(res.json().await?)
}
