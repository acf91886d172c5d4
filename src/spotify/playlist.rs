use reqwest::Client;
use serde_json::Value;

use crate::{
    error::ApiError,
    types::{SpotifyPlaylistsResponse, SpotifyTracksResponse, SpotifyUser, TrackInfo},
};

const API_URL: &str = "https://api.spotify.com/v1";

/// Retrieves the playlists of the user the access token belongs to.
///
/// Two sequential calls: `/me` resolves the current user id, then that
/// user's playlist listing is fetched. The playlist entries are passed
/// through untouched.
///
/// # Errors
///
/// A rejected token maps to [`ApiError::Auth`]; any other provider failure
/// on either call maps to [`ApiError::Upstream`].
pub async fn list_user_playlists(access_token: &str) -> Result<Vec<Value>, ApiError> {
    let client = Client::new();

    let user: SpotifyUser = client
        .get(format!("{API_URL}/me"))
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let playlists: SpotifyPlaylistsResponse = client
        .get(format!("{API_URL}/users/{}/playlists", user.id))
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(playlists.items)
}

/// Retrieves the ordered track list of a playlist.
///
/// Each entry is flattened to `{trackName, albumName, artists}`; see
/// [`flatten_tracks`] for the defaulting rules.
pub async fn list_playlist_tracks(
    playlist_id: &str,
    access_token: &str,
) -> Result<Vec<TrackInfo>, ApiError> {
    let client = Client::new();

    let response: SpotifyTracksResponse = client
        .get(format!("{API_URL}/playlists/{playlist_id}/tracks"))
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(flatten_tracks(response))
}

/// Flattens a raw playlist track listing into [`TrackInfo`] values.
///
/// Source order is preserved. A missing album name becomes an empty string
/// and a missing or empty artist list becomes an empty string; callers
/// never see a null. Entries without a track object (local or removed
/// tracks) are skipped.
pub fn flatten_tracks(response: SpotifyTracksResponse) -> Vec<TrackInfo> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .map(|track| TrackInfo {
            track_name: track.name,
            album_name: track.album.and_then(|a| a.name).unwrap_or_default(),
            artists: track
                .artists
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.name)
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}
