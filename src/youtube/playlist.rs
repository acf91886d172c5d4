use reqwest::Client;
use serde_json::json;

use crate::{
    error::ApiError,
    types::{CreatedPlaylist, InsertedPlaylistItem},
};

const PLAYLISTS_URL: &str = "https://www.googleapis.com/youtube/v3/playlists";
const PLAYLIST_ITEMS_URL: &str = "https://www.googleapis.com/youtube/v3/playlistItems";

/// Description stamped on every playlist this service creates.
const PLAYLIST_DESCRIPTION: &str = "Created by playlist-piper.";

/// Creates a public playlist with the given title.
///
/// Returns the provider-assigned id and snippet.
///
/// # Errors
///
/// A rejected token maps to [`ApiError::Auth`]; quota exhaustion and other
/// provider failures map to [`ApiError::Upstream`].
pub async fn create_playlist(access_token: &str, title: &str) -> Result<CreatedPlaylist, ApiError> {
    let body = json!({
        "snippet": {
            "title": title,
            "description": PLAYLIST_DESCRIPTION,
        },
        "status": {
            "privacyStatus": "public",
        },
    });

    let client = Client::new();
    let created: CreatedPlaylist = client
        .post(PLAYLISTS_URL)
        .query(&[("part", "snippet,status")])
        .bearer_auth(access_token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(created)
}

/// Appends a video to the end of a playlist.
///
/// # Errors
///
/// An invalid playlist or video id comes back as a provider 4xx and maps to
/// [`ApiError::Upstream`].
pub async fn insert_playlist_item(
    access_token: &str,
    playlist_id: &str,
    video_id: &str,
) -> Result<InsertedPlaylistItem, ApiError> {
    let body = json!({
        "snippet": {
            "playlistId": playlist_id,
            "resourceId": {
                "kind": "youtube#video",
                "videoId": video_id,
            },
        },
    });

    let client = Client::new();
    let inserted: InsertedPlaylistItem = client
        .post(PLAYLIST_ITEMS_URL)
        .query(&[("part", "snippet")])
        .bearer_auth(access_token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(inserted)
}
