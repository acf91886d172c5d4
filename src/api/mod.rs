//! # API Module
//!
//! HTTP request handlers for the service's routes, one handler per adapter
//! or orchestrator operation. Handlers are stateless: they pull parameters
//! out of the query string, invoke the corresponding component call and
//! return its result as JSON (or plain text for the OAuth URLs and the
//! Google access token).
//!
//! Every handler returns `Result<_, ApiError>`, so error reporting is
//! uniform across routes; see [`crate::error`] for the status mapping.
//!
//! ## Handlers
//!
//! - [`login`] / [`google_callback`] - Google OAuth URL and code exchange
//! - [`spotify_login`] / [`spotify_callback`] - Spotify OAuth URL and code
//!   exchange
//! - [`create_playlist`] / [`insert_video`] - YouTube playlist operations
//! - [`youtube_search`] - filtered, view-count-ranked video search
//! - [`spotify_playlists`] / [`playlist_tracks`] - Spotify read operations
//! - [`copy_playlist`] - the cross-provider copy orchestrator
//! - [`health`] - status endpoint for monitoring

mod auth;
mod copy;
mod health;
mod playlist;
mod search;

pub use auth::{google_callback, login, spotify_callback, spotify_login};
pub use copy::copy_playlist;
pub use health::health;
pub use playlist::{create_playlist, insert_video, playlist_tracks, spotify_playlists};
pub use search::youtube_search;

use std::collections::HashMap;

use crate::error::ApiError;

/// Pulls a required parameter out of the query string.
///
/// Missing parameters map to [`ApiError::Validation`] (HTTP 400) instead of
/// surfacing as a downstream provider rejection.
fn require<'a>(
    params: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or(ApiError::Validation(name))
}
