use playlist_piper::matching::{filter_candidates, top_by_views};
use playlist_piper::types::{SearchItem, SearchItemId, VideoMatch, VideoSnippet};

// Helper function to create a search candidate
fn candidate(video_id: &str, title: &str, channel: &str) -> SearchItem {
    SearchItem {
        id: SearchItemId {
            video_id: video_id.to_string(),
        },
        snippet: VideoSnippet {
            title: title.to_string(),
            channel_title: channel.to_string(),
        },
    }
}

// Helper function to create a ranked candidate
fn video(id: &str, view_count: u64) -> VideoMatch {
    VideoMatch {
        id: id.to_string(),
        title: format!("{id} title"),
        channel: format!("{id} channel"),
        view_count,
    }
}

#[test]
fn test_filter_requires_query_in_title() {
    let items = vec![
        candidate("a", "Paranoid (Official Audio)", "Black Sabbath"),
        candidate("b", "Iron Man (Official Audio)", "Black Sabbath"),
        candidate("c", "Paranoid cover", "Some Guy"),
    ];

    let kept = filter_candidates(items, "Paranoid", "Black Sabbath");

    // "Iron Man" fails the query containment even though the channel matches
    let ids: Vec<&str> = kept.iter().map(|item| item.id.video_id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_filter_artist_hint_matches_channel_or_title() {
    let items = vec![
        // Artist in the channel name
        candidate("a", "Paranoid (Official Audio)", "Black Sabbath"),
        // Artist in the title, uploaded by a topic channel
        candidate("b", "Black Sabbath - Paranoid", "Rock Classics"),
        // Artist nowhere
        candidate("c", "Paranoid (Lyric Video)", "Random Uploads"),
    ];

    let kept = filter_candidates(items, "Paranoid", "Black Sabbath");

    let ids: Vec<&str> = kept.iter().map(|item| item.id.video_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_filter_is_case_insensitive_and_trimmed() {
    let items = vec![candidate("a", "PARANOID (Remastered)", "black sabbath")];

    let kept = filter_candidates(items, "  paranoid ", " Black Sabbath  ");
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_filter_decodes_html_entities() {
    // Provider titles carry encoded characters; comparison must normalize
    let items = vec![candidate(
        "a",
        "Rock &amp; Roll (Official Audio)",
        "Led Zeppelin",
    )];

    let kept = filter_candidates(items, "Rock & Roll", "Led Zeppelin");
    assert_eq!(kept.len(), 1);

    // The raw encoded form does not match the decoded query
    let items = vec![candidate("b", "Rock &amp; Roll", "Led Zeppelin")];
    let kept = filter_candidates(items, "Rock &amp; Roll", "Led Zeppelin");
    assert!(kept.is_empty());
}

#[test]
fn test_filter_empty_input() {
    let kept = filter_candidates(Vec::new(), "anything", "anyone");
    assert!(kept.is_empty());
}

#[test]
fn test_top_by_views_picks_maximum() {
    let selected = top_by_views(vec![video("a", 5), video("b", 20), video("c", 3)]).unwrap();
    assert_eq!(selected.id, "b");
    assert_eq!(selected.view_count, 20);
}

#[test]
fn test_top_by_views_tie_resolves_to_first_seen() {
    let selected = top_by_views(vec![video("first", 20), video("second", 20)]).unwrap();
    assert_eq!(selected.id, "first");
}

#[test]
fn test_top_by_views_empty_is_none() {
    // Reduction over an empty set must not panic
    assert!(top_by_views(Vec::new()).is_none());
}
