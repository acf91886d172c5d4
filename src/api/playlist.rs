use std::collections::HashMap;

use axum::{extract::Query, response::Json};
use serde_json::Value;

use crate::{
    error::ApiError,
    spotify,
    types::{CreatedPlaylist, InsertedPlaylistItem, TrackInfo},
    youtube,
};

use super::require;

/// `GET /create-playlist?accessToken=...&playlistTitle=...` — creates a
/// public YouTube playlist and returns its id and metadata.
pub async fn create_playlist(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CreatedPlaylist>, ApiError> {
    let access_token = require(&params, "accessToken")?;
    let title = require(&params, "playlistTitle")?;
    let created = youtube::playlist::create_playlist(access_token, title).await?;
    Ok(Json(created))
}

/// `GET /insert-video?accessToken=...&playlistId=...&videoId=...` — appends
/// a video to a YouTube playlist.
pub async fn insert_video(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InsertedPlaylistItem>, ApiError> {
    let access_token = require(&params, "accessToken")?;
    let playlist_id = require(&params, "playlistId")?;
    let video_id = require(&params, "videoId")?;
    let inserted =
        youtube::playlist::insert_playlist_item(access_token, playlist_id, video_id).await?;
    Ok(Json(inserted))
}

/// `GET /getspotifyplaylists?accessToken=...` — returns the caller's
/// Spotify playlists.
pub async fn spotify_playlists(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let access_token = require(&params, "accessToken")?;
    let playlists = spotify::playlist::list_user_playlists(access_token).await?;
    Ok(Json(playlists))
}

/// `GET /fetchtracks-byplaylistid?playlistId=...&accessToken=...` — returns
/// the ordered, flattened track list of a Spotify playlist.
pub async fn playlist_tracks(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<TrackInfo>>, ApiError> {
    let playlist_id = require(&params, "playlistId")?;
    let access_token = require(&params, "accessToken")?;
    let tracks = spotify::playlist::list_playlist_tracks(playlist_id, access_token).await?;
    Ok(Json(tracks))
}
