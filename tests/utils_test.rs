use futures::stream;
use serde_json::{Value, json};
use sporlbrowse::{Res, utils::*};

fn names(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(|i| i["name"].as_str()).collect()
}

#[test]
fn test_items_at() {
    let page = json!({
        "items": [{"name": "a"}],
        "playlists": {"items": [{"name": "p"}]},
        "tracks": {"items": "not a list"},
    });

    assert_eq!(names(items_at(&page, ITEMS)), vec!["a"]);
    assert_eq!(names(items_at(&page, PLAYLIST_ITEMS)), vec!["p"]);
    assert!(items_at(&page, TRACK_ITEMS).is_empty());
    assert!(items_at(&json!(null), ITEMS).is_empty());
    assert!(items_at(&json!({}), PLAYLIST_ITEMS).is_empty());
}

#[tokio::test]
async fn test_collect_items_skips_absent_pages() {
    let pages: Vec<Res<Option<Value>>> = vec![
        Ok(Some(json!({"items": [{"name": "1"}, {"name": "2"}]}))),
        Ok(None),
        Ok(Some(json!({"items": []}))),
        Ok(Some(json!({"total": 0}))),
        Ok(Some(json!({"items": [{"name": "3"}]}))),
    ];

    let items = collect_items(stream::iter(pages), ITEMS).await.unwrap();

    assert_eq!(names(&items), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_collect_nested_items() {
    let pages: Vec<Res<Option<Value>>> = vec![
        Ok(Some(json!({"playlists": {"items": [{"name": "x"}]}}))),
        Ok(Some(json!({"playlists": {"items": [{"name": "y"}]}}))),
    ];

    let items = collect_items(stream::iter(pages), PLAYLIST_ITEMS)
        .await
        .unwrap();

    assert_eq!(names(&items), vec!["x", "y"]);
}

#[tokio::test]
async fn test_collect_items_from_no_pages() {
    let pages: Vec<Res<Option<Value>>> = Vec::new();

    let items = collect_items(stream::iter(pages), ITEMS).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_collect_items_preserves_order() {
    let pages: Vec<Res<Option<Value>>> = vec![
        Ok(Some(json!({"items": [{"name": "1"}]}))),
        Ok(None),
        Ok(Some(json!({"items": [{"name": "2"}, {"name": "3"}]}))),
    ];

    let items = collect_items(stream::iter(pages), ITEMS).await.unwrap();

    assert_eq!(names(&items), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_collect_items_stops_on_error() {
    let pages: Vec<Res<Option<Value>>> = vec![
        Ok(Some(json!({"items": [{"name": "1"}]}))),
        Err("boom".into()),
        Ok(Some(json!({"items": [{"name": "2"}]}))),
    ];

    let result = collect_items(stream::iter(pages), ITEMS).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().to_string(), "boom");
}

#[test]
fn test_next_page_url() {
    let top_level = json!({"items": [], "next": "https://api.spotify.com/v1/me/tracks?offset=50"});
    assert_eq!(
        next_page_url(&top_level).as_deref(),
        Some("https://api.spotify.com/v1/me/tracks?offset=50")
    );

    let nested = json!({
        "message": "Featured",
        "playlists": {"items": [], "next": "https://api.spotify.com/v1/browse/featured-playlists?offset=50"},
    });
    assert_eq!(
        next_page_url(&nested).as_deref(),
        Some("https://api.spotify.com/v1/browse/featured-playlists?offset=50")
    );

    assert_eq!(next_page_url(&json!({"items": [], "next": null})), None);
    assert_eq!(next_page_url(&json!(null)), None);
}
