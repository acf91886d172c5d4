use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode};

use crate::{copy, error::ApiError};

use super::require;

/// `GET /copy-playlist?googAccessToken=...&sptfyAccessToken=...&playlistId=...`
/// — runs the orchestrator and answers an empty 200 on success.
///
/// A failure on any single track aborts the copy and surfaces through the
/// uniform error mapping; the destination playlist may already exist with a
/// partial track list at that point.
pub async fn copy_playlist(
    Query(params): Query<HashMap<String, String>>,
) -> Result<StatusCode, ApiError> {
    let google_token = require(&params, "googAccessToken")?;
    let spotify_token = require(&params, "sptfyAccessToken")?;
    let playlist_id = require(&params, "playlistId")?;
    copy::copy_playlist(google_token, spotify_token, playlist_id).await?;
    Ok(StatusCode::OK)
}
