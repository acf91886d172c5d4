use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, fatal, info};

async fn hello() -> &'static str {
    "Hello World!"
}

/// Builds the application router: one route per adapter/orchestrator
/// operation, plus the greeting and health endpoints.
pub fn app() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::google_callback))
        .route("/create-playlist", get(api::create_playlist))
        .route("/youtube-search", get(api::youtube_search))
        .route("/insert-video", get(api::insert_video))
        .route("/spotify-login", get(api::spotify_login))
        .route("/callbackSpotify", get(api::spotify_callback))
        .route("/getspotifyplaylists", get(api::spotify_playlists))
        .route("/fetchtracks-byplaylistid", get(api::playlist_tracks))
        .route("/copy-playlist", get(api::copy_playlist))
}

/// Binds the listener and serves requests until the process exits.
pub async fn start_api_server(address: &str) {
    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => fatal!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => fatal!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);
    if let Err(e) = axum::serve(listener, app()).await {
        fatal!("Server error: {}", e);
    }
}
