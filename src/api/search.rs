use std::collections::HashMap;

use axum::{extract::Query, response::Json};

use crate::{error::ApiError, matching, types::VideoMatch};

use super::require;

/// `GET /youtube-search?query=...&artist=...&accessToken=...` — returns the
/// best-matching video for the query, or 404 when nothing passes the filter.
pub async fn youtube_search(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<VideoMatch>, ApiError> {
    let query = require(&params, "query")?;
    let artist = require(&params, "artist")?;
    let access_token = require(&params, "accessToken")?;
    let best = matching::select_best_match(query, artist, access_token).await?;
    Ok(Json(best))
}
