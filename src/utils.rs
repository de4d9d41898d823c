use futures::{Stream, StreamExt};
use serde_json::Value;

use crate::Res;

/// Item list at the top of a page (`items`).
pub const ITEMS: &[&str] = &["items"];

/// Track list embedded in an album or playlist object (`tracks.items`).
pub const TRACK_ITEMS: &[&str] = &["tracks", "items"];

/// Item list of a featured-playlists page (`playlists.items`).
pub const PLAYLIST_ITEMS: &[&str] = &["playlists", "items"];

/// Returns the items found at `path` inside `page`, or an empty slice when
/// any key along the way is missing or not of the expected shape.
pub fn items_at<'a>(page: &'a Value, path: &[&str]) -> &'a [Value] {
    path.iter()
        .try_fold(page, |v, key| v.get(*key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Pulls every page out of `pages` and flattens their items, preserving page
/// order and the order within each page. Absent pages contribute nothing.
///
/// Pages are requested one after the other as the stream is polled. The
/// first transport error stops the iteration and is returned.
pub async fn collect_items<S>(pages: S, path: &[&str]) -> Res<Vec<Value>>
where
    S: Stream<Item = Res<Option<Value>>>,
{
    let mut pages = std::pin::pin!(pages);
    let mut items = Vec::new();

    while let Some(page) = pages.next().await {
        if let Some(page) = page? {
            items.extend(items_at(&page, path).iter().cloned());
        }
    }

    Ok(items)
}

/// URL of the page following `page`.
///
/// Looked up at the top level first, then one level down for responses that
/// wrap their paging object (e.g. `{"playlists": {"items": [..], "next": ..}}`).
pub fn next_page_url(page: &Value) -> Option<String> {
    if let Some(next) = page.get("next").and_then(Value::as_str) {
        return Some(next.to_string());
    }

    page.as_object()?
        .values()
        .find_map(|v| v.get("next").and_then(Value::as_str))
        .map(str::to_string)
}
