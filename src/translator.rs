//! Conversion of raw catalog records into listing entries.
//!
//! Every function here is pure. Records that are not objects of the expected
//! `type`, or that lack a `uri`, are skipped so one bad record never hides
//! the rest of a listing. Output order always follows input order.

use serde_json::Value;

use crate::types::Ref;

/// Returns the record's URI if it is an object of type `kind` with a string `uri`.
fn valid_uri<'a>(record: &'a Value, kind: &str) -> Option<&'a str> {
    if record.get("type").and_then(Value::as_str) != Some(kind) {
        return None;
    }
    record.get("uri").and_then(Value::as_str)
}

fn name_or<'a>(record: &'a Value, fallback: &'a str) -> &'a str {
    record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
}

/// Unwraps "saved object" wrappers such as `{"added_at": .., "track": {..}}`.
fn unwrap_saved<'a>(record: &'a Value, key: &str) -> &'a Value {
    match record.get(key) {
        Some(inner) if inner.is_object() => inner,
        _ => record,
    }
}

pub fn to_track_ref(record: &Value, check_playable: bool) -> Option<Ref> {
    let uri = valid_uri(record, "track")?;

    // Relinked tracks keep their original URI so playback resolves them again.
    let uri = record
        .pointer("/linked_from/uri")
        .and_then(Value::as_str)
        .unwrap_or(uri);

    if check_playable && record.get("is_playable").and_then(Value::as_bool) != Some(true) {
        tracing::debug!("{:?} is not playable", uri);
        return None;
    }

    Some(Ref::track(uri, name_or(record, uri)))
}

/// Translates tracks, accepting both plain and saved track objects.
///
/// With `check_playable`, only tracks the catalog marks `is_playable: true`
/// are kept.
pub fn to_track_refs<'a, I>(records: I, check_playable: bool) -> Vec<Ref>
where
    I: IntoIterator<Item = &'a Value>,
{
    records
        .into_iter()
        .filter_map(|r| to_track_ref(unwrap_saved(r, "track"), check_playable))
        .collect()
}

pub fn to_album_ref(record: &Value) -> Option<Ref> {
    let uri = valid_uri(record, "album")?;

    let name = match record.get("name").and_then(Value::as_str) {
        Some(album) => match record
            .pointer("/artists/0/name")
            .and_then(Value::as_str)
            .filter(|artist| !artist.is_empty())
        {
            Some(artist) => format!("{artist} - {album}"),
            None => album.to_string(),
        },
        None => uri.to_string(),
    };

    Some(Ref::album(uri, name))
}

/// Translates albums, accepting both plain and saved album objects.
pub fn to_album_refs<'a, I>(records: I) -> Vec<Ref>
where
    I: IntoIterator<Item = &'a Value>,
{
    records
        .into_iter()
        .filter_map(|r| to_album_ref(unwrap_saved(r, "album")))
        .collect()
}

pub fn to_artist_ref(record: &Value) -> Option<Ref> {
    let uri = valid_uri(record, "artist")?;
    Some(Ref::artist(uri, name_or(record, uri)))
}

pub fn to_artist_refs<'a, I>(records: I) -> Vec<Ref>
where
    I: IntoIterator<Item = &'a Value>,
{
    records.into_iter().filter_map(to_artist_ref).collect()
}

/// Translates a playlist. When `username` is given, playlists owned by
/// someone else get their owner appended to the name.
pub fn to_playlist_ref(record: &Value, username: Option<&str>) -> Option<Ref> {
    let uri = valid_uri(record, "playlist")?;
    let name = name_or(record, uri);

    let owner = record
        .pointer("/owner/id")
        .and_then(Value::as_str)
        .or(username);

    let name = match (username, owner) {
        (Some(user), Some(owner)) if owner != user => format!("{name} (by {owner})"),
        _ => name.to_string(),
    };

    Some(Ref::playlist(uri, name))
}

pub fn to_playlist_refs<'a, I>(records: I, username: Option<&str>) -> Vec<Ref>
where
    I: IntoIterator<Item = &'a Value>,
{
    records
        .into_iter()
        .filter_map(|r| to_playlist_ref(r, username))
        .collect()
}
