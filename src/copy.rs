//! The playlist copy orchestrator.
//!
//! Sequentially combines the two adapters: fetch the Spotify track list,
//! create one destination YouTube playlist, then search-and-insert a video
//! per track in source order. All-or-nothing: a failure on any single track
//! aborts the remaining copy with no partial-success report.

use crate::{config, error::ApiError, info, spotify, success, types::TrackInfo, warning, youtube};

/// Builds the free-text search query for one track:
/// `"<trackName> <artists> album: <albumName>"`.
pub fn search_query(track: &TrackInfo) -> String {
    format!(
        "{} {} album: {}",
        track.track_name, track.artists, track.album_name
    )
}

/// Copies a Spotify playlist into a newly created YouTube playlist.
///
/// The destination playlist uses the configured title, not the source
/// playlist's name. Per track the top search hit is taken directly
/// (`maxResults=1`, no ranking); a track with zero search results fails the
/// whole copy with [`ApiError::NoMatch`]. An empty source playlist still
/// creates the destination playlist and succeeds without any inserts.
///
/// Tracks are processed strictly one at a time, preserving source order.
pub async fn copy_playlist(
    google_token: &str,
    spotify_token: &str,
    spotify_playlist_id: &str,
) -> Result<(), ApiError> {
    let tracks = spotify::playlist::list_playlist_tracks(spotify_playlist_id, spotify_token).await?;

    let destination =
        youtube::playlist::create_playlist(google_token, &config::copy_playlist_title()).await?;
    if tracks.is_empty() {
        warning!("Source playlist {} has no tracks", spotify_playlist_id);
    }
    info!(
        "Copying {} tracks into playlist {}",
        tracks.len(),
        destination.id
    );

    for track in &tracks {
        let query = search_query(track);
        let results = youtube::search::search_videos(google_token, &query, 1).await?;
        let video = results
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NoMatch(query.clone()))?;

        youtube::playlist::insert_playlist_item(google_token, &destination.id, &video.id.video_id)
            .await?;
        info!("Inserted '{}' for track '{}'", video.snippet.title, track.track_name);
    }

    success!("Copied {} tracks into playlist {}", tracks.len(), destination.id);
    Ok(())
}
