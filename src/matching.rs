//! Search result filtering and view-count ranking.
//!
//! The only algorithmic logic in the service: given a free-text query and
//! an artist hint, keep the YouTube candidates that textually match and
//! pick the one with the most views. The filter and the reduction are pure
//! functions so they are testable without network access.

use crate::{
    error::ApiError,
    types::{SearchItem, VideoMatch},
    youtube,
};

/// How many raw candidates to pull from the search endpoint.
const MAX_CANDIDATES: u32 = 20;

/// Keeps the candidates whose decoded text matches the query and artist hint.
///
/// A candidate survives only if the channel name or the video title contains
/// the artist hint AND the video title contains the query. Provider titles
/// may carry HTML entities (`&amp;`, `&#39;`), so both sides are
/// entity-decoded before the case-insensitive, trimmed comparison.
pub fn filter_candidates(items: Vec<SearchItem>, query: &str, artist: &str) -> Vec<SearchItem> {
    let query = query.trim().to_lowercase();
    let artist = artist.trim().to_lowercase();

    items
        .into_iter()
        .filter(|item| {
            let channel =
                html_escape::decode_html_entities(&item.snippet.channel_title).to_lowercase();
            let title = html_escape::decode_html_entities(&item.snippet.title).to_lowercase();
            (channel.contains(&artist) || title.contains(&artist)) && title.contains(&query)
        })
        .collect()
}

/// Reduces candidates to the one with the maximum view count.
///
/// Ties resolve to the first-seen candidate (strict-greater comparison), and
/// an empty input yields `None` instead of a panic.
pub fn top_by_views(candidates: Vec<VideoMatch>) -> Option<VideoMatch> {
    candidates.into_iter().reduce(|best, current| {
        if current.view_count > best.view_count {
            current
        } else {
            best
        }
    })
}

/// Finds the best-matching YouTube video for a query and artist hint.
///
/// Searches for up to 20 candidates, filters them by textual containment,
/// batch-fetches statistics for the survivors and returns the highest
/// view-count match.
///
/// # Errors
///
/// Returns [`ApiError::NoMatch`] when the filtered set is empty — an empty
/// reduction is an error condition, not a silent skip — and propagates
/// adapter errors otherwise.
pub async fn select_best_match(
    query: &str,
    artist: &str,
    access_token: &str,
) -> Result<VideoMatch, ApiError> {
    let items = youtube::search::search_videos(access_token, query, MAX_CANDIDATES).await?;
    let survivors = filter_candidates(items, query, artist);
    if survivors.is_empty() {
        return Err(ApiError::NoMatch(query.to_string()));
    }

    let ids: Vec<String> = survivors.into_iter().map(|item| item.id.video_id).collect();
    let candidates = youtube::search::video_statistics(access_token, &ids).await?;

    top_by_views(candidates).ok_or_else(|| ApiError::NoMatch(query.to_string()))
}
