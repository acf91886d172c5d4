use playlist_piper::copy::search_query;
use playlist_piper::spotify::playlist::flatten_tracks;
use playlist_piper::types::{SpotifyTracksResponse, TrackInfo};
use serde_json::json;

// Helper to parse a playlist track listing the way the adapter does
fn parse(items: serde_json::Value) -> Vec<TrackInfo> {
    let response: SpotifyTracksResponse =
        serde_json::from_value(json!({ "items": items })).unwrap();
    flatten_tracks(response)
}

#[test]
fn test_flatten_complete_track() {
    let tracks = parse(json!([
        {
            "track": {
                "name": "A",
                "album": { "name": "X" },
                "artists": [ { "name": "B" } ]
            }
        }
    ]));

    assert_eq!(
        tracks,
        vec![TrackInfo {
            track_name: "A".to_string(),
            album_name: "X".to_string(),
            artists: "B".to_string(),
        }]
    );
}

#[test]
fn test_flatten_missing_album_is_empty_string() {
    let tracks = parse(json!([
        { "track": { "name": "A", "album": null, "artists": [ { "name": "B" } ] } },
        { "track": { "name": "C", "album": { "name": null }, "artists": [ { "name": "B" } ] } }
    ]));

    // Never null, always an empty string
    assert_eq!(tracks[0].album_name, "");
    assert_eq!(tracks[1].album_name, "");
}

#[test]
fn test_flatten_missing_artists_is_empty_string() {
    let tracks = parse(json!([
        { "track": { "name": "A", "album": { "name": "X" }, "artists": null } },
        { "track": { "name": "B", "album": { "name": "X" }, "artists": [] } }
    ]));

    assert_eq!(tracks[0].artists, "");
    assert_eq!(tracks[1].artists, "");
}

#[test]
fn test_flatten_joins_artists_with_spaces() {
    let tracks = parse(json!([
        {
            "track": {
                "name": "A",
                "album": { "name": "X" },
                "artists": [ { "name": "B" }, { "name": "C" }, { "name": "D" } ]
            }
        }
    ]));

    assert_eq!(tracks[0].artists, "B C D");
}

#[test]
fn test_flatten_skips_itemless_entries_and_keeps_order() {
    let tracks = parse(json!([
        { "track": { "name": "First", "album": { "name": "X" }, "artists": [] } },
        { "track": null },
        { "track": { "name": "Second", "album": { "name": "X" }, "artists": [] } }
    ]));

    let names: Vec<&str> = tracks.iter().map(|t| t.track_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_flatten_empty_playlist() {
    assert!(parse(json!([])).is_empty());
}

#[test]
fn test_search_query_shape() {
    let track = TrackInfo {
        track_name: "A".to_string(),
        album_name: "X".to_string(),
        artists: "B".to_string(),
    };
    assert_eq!(search_query(&track), "A B album: X");
}

#[test]
fn test_search_query_with_empty_fields() {
    // Defaulted fields still produce a usable query string
    let track = TrackInfo {
        track_name: "A".to_string(),
        album_name: String::new(),
        artists: String::new(),
    };
    assert_eq!(search_query(&track), "A  album: ");
}
