use reqwest::Client;

use crate::{
    error::ApiError,
    types::{SearchItem, SearchResponse, VideoListResponse, VideoMatch},
};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Runs a free-text video search and returns the raw candidate list.
///
/// No filtering or ranking happens here; see
/// [`matching`](crate::matching) for candidate selection.
pub async fn search_videos(
    access_token: &str,
    query: &str,
    max_results: u32,
) -> Result<Vec<SearchItem>, ApiError> {
    let client = Client::new();
    let response: SearchResponse = client
        .get(SEARCH_URL)
        .query(&[
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", &max_results.to_string()),
        ])
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response.items)
}

/// Batch-fetches snippet and view counts for a set of video ids.
///
/// One call regardless of how many ids are passed. An unparsable or absent
/// view count becomes 0 rather than an error.
pub async fn video_statistics(
    access_token: &str,
    video_ids: &[String],
) -> Result<Vec<VideoMatch>, ApiError> {
    let client = Client::new();
    let response: VideoListResponse = client
        .get(VIDEOS_URL)
        .query(&[
            ("part", "snippet,statistics"),
            ("id", &video_ids.join(",")),
        ])
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response
        .items
        .into_iter()
        .map(|item| VideoMatch {
            id: item.id,
            title: item.snippet.title,
            channel: item.snippet.channel_title,
            view_count: item
                .statistics
                .view_count
                .and_then(|count| count.parse().ok())
                .unwrap_or(0),
        })
        .collect())
}
