//! Configuration management for Playlist Piper.
//!
//! All provider credentials and redirect URLs are supplied through the
//! environment, never hard-coded. Values are loaded from a `.env` file in
//! the platform-specific local data directory (`playlist-piper/.env`) when
//! present, otherwise from the process environment directly.

use dotenv;
use std::{env, path::PathBuf};

/// Environment variables the service cannot start without.
const REQUIRED_VARS: [&str; 7] = [
    "SERVER_ADDRESS",
    "GOOGLE_CLIENT_ID",
    "GOOGLE_CLIENT_SECRET",
    "GOOGLE_REDIRECT_URI",
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `playlist-piper/.env` underneath the platform data directory:
/// - Linux: `~/.local/share/playlist-piper/.env`
/// - macOS: `~/Library/Application Support/playlist-piper/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-piper/.env`
///
/// A missing file is not an error; the process environment may already carry
/// every required variable (containers, systemd units).
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-piper/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the names of required environment variables that are not set.
///
/// Called once at startup so a misconfigured deployment fails immediately
/// with a complete list instead of panicking mid-request.
pub fn missing_vars() -> Vec<&'static str> {
    REQUIRED_VARS
        .iter()
        .filter(|name| env::var(name).is_err())
        .copied()
        .collect()
}

/// Returns the address and port the HTTP server should bind to.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Google OAuth client ID.
///
/// # Panics
///
/// Panics if the `GOOGLE_CLIENT_ID` environment variable is not set.
pub fn google_client_id() -> String {
    env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
}

/// Returns the Google OAuth client secret.
///
/// The secret is confidential; it is only ever sent to Google's token
/// endpoint and must never appear in logs.
///
/// # Panics
///
/// Panics if the `GOOGLE_CLIENT_SECRET` environment variable is not set.
pub fn google_client_secret() -> String {
    env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
}

/// Returns the redirect URI registered for the Google OAuth client,
/// e.g. `http://localhost:3000/callback`.
///
/// # Panics
///
/// Panics if the `GOOGLE_REDIRECT_URI` environment variable is not set.
pub fn google_redirect_uri() -> String {
    env::var("GOOGLE_REDIRECT_URI").expect("GOOGLE_REDIRECT_URI must be set")
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the redirect URI registered for the Spotify application,
/// e.g. `http://localhost:3000/callbackSpotify`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the title used for playlists created by the copy orchestrator.
///
/// Optional; defaults to the historical placeholder until a naming scheme
/// derived from the source playlist is decided on.
pub fn copy_playlist_title() -> String {
    env::var("COPY_PLAYLIST_TITLE").unwrap_or_else(|_| "goto - mostly rock".to_string())
}
