//! Data structures and type definitions.
//!
//! Everything here is a transient request/response shape; nothing is
//! persisted or cached across calls. Provider JSON field names are mapped
//! onto snake_case with serde renames.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OAuth tokens
// ---------------------------------------------------------------------------

/// Token payload returned by Google's OAuth token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub token_type: String,
    pub scope: Option<String>,
}

// ---------------------------------------------------------------------------
// Spotify Web API shapes
// ---------------------------------------------------------------------------

/// `/v1/me` — only the user id is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyUser {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistsResponse {
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTracksResponse {
    pub items: Vec<SpotifyPlaylistItem>,
}

/// One entry of a playlist's track listing. Local or removed tracks come
/// back with `track: null`, hence the `Option`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    pub album: Option<SpotifyAlbum>,
    pub artists: Option<Vec<SpotifyArtist>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

/// The flattened track shape handed to callers and to the copy
/// orchestrator. Album and artists default to empty strings, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub track_name: String,
    pub album_name: String,
    /// All artist names joined by a single space.
    pub artists: String,
}

// ---------------------------------------------------------------------------
// YouTube Data API shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

/// YouTube reports counts as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

/// A ranked search candidate: the shape returned by `/youtube-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMatch {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub view_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
    pub snippet: CreatedPlaylistSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlaylistSnippet {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertedPlaylistItem {
    pub id: String,
}
