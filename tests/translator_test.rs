mod common;

use common::*;
use serde_json::json;
use sporlbrowse::{Ref, translator::*};

#[test]
fn test_track_refs_filter_unplayable() {
    let records = vec![
        track("t1", "One", true),
        track("t2", "Two", false),
        json!({"type": "track", "uri": "spotify:track:t3", "name": "No flag"}),
    ];

    let checked = to_track_refs(&records, true);
    assert_eq!(checked, vec![Ref::track("spotify:track:t1", "One")]);

    let unchecked = to_track_refs(&records, false);
    let uris: Vec<&str> = unchecked.iter().map(|r| r.uri.as_str()).collect();
    assert_eq!(
        uris,
        vec!["spotify:track:t1", "spotify:track:t2", "spotify:track:t3"]
    );
}

#[test]
fn test_track_ref_prefers_linked_from_uri() {
    let record = json!({
        "type": "track",
        "uri": "spotify:track:relinked",
        "name": "Song",
        "is_playable": true,
        "linked_from": {"uri": "spotify:track:original"},
    });

    assert_eq!(
        to_track_ref(&record, true),
        Some(Ref::track("spotify:track:original", "Song"))
    );
}

#[test]
fn test_track_ref_name_falls_back_to_uri() {
    let record = json!({"type": "track", "uri": "spotify:track:t1", "is_playable": true});

    assert_eq!(
        to_track_ref(&record, true),
        Some(Ref::track("spotify:track:t1", "spotify:track:t1"))
    );
}

#[test]
fn test_track_refs_unwrap_saved_tracks() {
    let records = vec![json!({"added_at": "2024-01-01", "track": track("t1", "Saved", true)})];

    assert_eq!(
        to_track_refs(&records, true),
        vec![Ref::track("spotify:track:t1", "Saved")]
    );
}

#[test]
fn test_invalid_records_are_skipped() {
    let records = vec![
        json!(null),
        json!("spotify:track:t0"),
        json!({"type": "track", "name": "No URI", "is_playable": true}),
        json!({"type": "episode", "uri": "spotify:episode:e1", "is_playable": true}),
        json!({"uri": "spotify:track:t9", "is_playable": true}),
        track("t1", "Good", true),
    ];

    assert_eq!(
        to_track_refs(&records, false),
        vec![Ref::track("spotify:track:t1", "Good")]
    );
    assert!(to_album_refs(&records).is_empty());
    assert!(to_artist_refs(&records).is_empty());
    assert!(to_playlist_refs(&records, None).is_empty());
}

#[test]
fn test_album_ref_names() {
    // Artist prefix when the first artist has a name
    assert_eq!(
        to_album_ref(&album("a1", "OK Computer", "Radiohead")),
        Some(Ref::album("spotify:album:a1", "Radiohead - OK Computer"))
    );

    // Album name alone without artists
    let record = json!({"type": "album", "uri": "spotify:album:a2", "name": "Solo", "artists": []});
    assert_eq!(
        to_album_ref(&record),
        Some(Ref::album("spotify:album:a2", "Solo"))
    );

    // URI when the album has no name
    let record = json!({"type": "album", "uri": "spotify:album:a3"});
    assert_eq!(
        to_album_ref(&record),
        Some(Ref::album("spotify:album:a3", "spotify:album:a3"))
    );
}

#[test]
fn test_album_refs_unwrap_saved_albums_and_keep_order() {
    let records = vec![
        json!({"added_at": "2024-01-02", "album": album("a2", "Second", "B")}),
        album("a1", "First", "A"),
    ];

    assert_eq!(
        to_album_refs(&records),
        vec![
            Ref::album("spotify:album:a2", "B - Second"),
            Ref::album("spotify:album:a1", "A - First"),
        ]
    );
}

#[test]
fn test_artist_refs() {
    let records = vec![
        artist("a1", "Björk"),
        json!({"type": "artist", "uri": "spotify:artist:a2"}),
    ];

    assert_eq!(
        to_artist_refs(&records),
        vec![
            Ref::artist("spotify:artist:a1", "Björk"),
            Ref::artist("spotify:artist:a2", "spotify:artist:a2"),
        ]
    );
}

#[test]
fn test_playlist_ref_marks_foreign_owner() {
    let own = playlist("p1", "Mine", "alice");
    let foreign = playlist("p2", "Theirs", "bob");

    assert_eq!(
        to_playlist_refs(&[own.clone(), foreign.clone()], Some("alice")),
        vec![
            Ref::playlist("spotify:playlist:p1", "Mine"),
            Ref::playlist("spotify:playlist:p2", "Theirs (by bob)"),
        ]
    );

    // Without a username nothing is marked
    assert_eq!(
        to_playlist_ref(&foreign, None),
        Some(Ref::playlist("spotify:playlist:p2", "Theirs"))
    );
}
