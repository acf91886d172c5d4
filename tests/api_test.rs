use std::collections::HashMap;
use std::env;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use playlist_piper::error::ApiError;
use playlist_piper::{spotify, youtube};

#[test]
fn test_error_status_mapping() {
    // One uniform mapping layer: tagged error variants to status codes
    let cases = [
        (
            ApiError::Validation("accessToken"),
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Auth("bad code".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::NoMatch("some query".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::Upstream("quota exceeded".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
        // A failure must never surface with a success status
        assert!(!response.status().is_success());
    }
}

// Splits a query string back into decoded key/value pairs
fn decode_query(url: &str) -> HashMap<String, String> {
    let (_, query) = url.split_once('?').expect("authorization URL has a query");
    query
        .split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=').expect("key=value pair");
            (
                key.to_string(),
                urlencoding::decode(value).unwrap().into_owned(),
            )
        })
        .collect()
}

#[test]
fn test_authorization_urls_round_trip() {
    // set_var is unsafe with threads around; these values are only read
    // within this test.
    unsafe {
        env::set_var("GOOGLE_CLIENT_ID", "goog-client-id");
        env::set_var("GOOGLE_REDIRECT_URI", "http://localhost:3000/callback");
        env::set_var("SPOTIFY_CLIENT_ID", "sptfy-client-id");
        env::set_var(
            "SPOTIFY_REDIRECT_URI",
            "http://localhost:3000/callbackSpotify",
        );
    }

    let google = youtube::auth::authorize_url();
    assert!(google.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    let params = decode_query(&google);
    assert_eq!(params["client_id"], "goog-client-id");
    assert_eq!(params["redirect_uri"], "http://localhost:3000/callback");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["scope"], "https://www.googleapis.com/auth/youtube");
    assert_eq!(params["access_type"], "offline");

    let spotify = spotify::auth::authorize_url();
    assert!(spotify.starts_with("https://accounts.spotify.com/authorize?"));
    let params = decode_query(&spotify);
    assert_eq!(params["client_id"], "sptfy-client-id");
    assert_eq!(
        params["redirect_uri"],
        "http://localhost:3000/callbackSpotify"
    );
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["scope"], "user-read-private playlist-read-private");
}
