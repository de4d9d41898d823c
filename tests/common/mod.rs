#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;
use futures::stream;
use serde_json::{Value, json};
use sporlbrowse::{
    Res,
    spotify::{CatalogClient, Link, PageStream},
};

/// In-memory catalog that records every call made to it.
#[derive(Default)]
pub struct FakeClient {
    pub logged_in: bool,
    pub albums: Vec<Value>,
    pub top_tracks: Vec<Value>,
    pub artist_albums: Vec<Value>,
    pub playlist: Option<Value>,
    pub pages: HashMap<String, Vec<Option<Value>>>,
    pub top_tracks_delay: Duration,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn logged_in() -> Self {
        FakeClient {
            logged_in: true,
            ..Default::default()
        }
    }

    pub fn logged_out() -> Self {
        FakeClient::default()
    }

    pub fn with_pages(mut self, path: &str, pages: Vec<Option<Value>>) -> Self {
        self.pages.insert(path.to_string(), pages);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> Res<()> {
        if self.fail {
            return Err("catalog unavailable".into());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for FakeClient {
    fn logged_in(&self) -> bool {
        self.logged_in
    }

    async fn get_albums(&self, links: &[Link]) -> Res<Vec<Value>> {
        let uris: Vec<&str> = links.iter().map(|l| l.uri.as_str()).collect();
        self.record(format!("get_albums {}", uris.join(",")));
        self.check()?;
        Ok(self.albums.clone())
    }

    async fn get_artist_top_tracks(&self, link: &Link) -> Res<Vec<Value>> {
        self.record(format!("get_artist_top_tracks {}", link.uri));
        tokio::time::sleep(self.top_tracks_delay).await;
        self.check()?;
        Ok(self.top_tracks.clone())
    }

    async fn get_artist_albums(&self, link: &Link, all_tracks: bool) -> Res<Vec<Value>> {
        self.record(format!("get_artist_albums {} {}", link.uri, all_tracks));
        self.check()?;
        Ok(self.artist_albums.clone())
    }

    async fn get_playlist(&self, link: &Link) -> Res<Option<Value>> {
        self.record(format!("get_playlist {}", link.uri));
        self.check()?;
        Ok(self.playlist.clone())
    }

    fn get_all<'a>(&'a self, path: &str, params: &HashMap<String, String>) -> PageStream<'a> {
        let mut params: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        params.sort();
        self.record(format!("get_all {} {}", path, params.join("&")));

        let pages: Vec<Res<Option<Value>>> = if self.fail {
            vec![Err("catalog unavailable".into())]
        } else {
            let pages = self.pages.get(path).cloned().unwrap_or_default();
            pages.into_iter().map(Ok).collect()
        };
        Box::pin(stream::iter(pages))
    }
}

pub fn track(id: &str, name: &str, playable: bool) -> Value {
    json!({
        "type": "track",
        "uri": format!("spotify:track:{id}"),
        "name": name,
        "is_playable": playable,
    })
}

pub fn album(id: &str, name: &str, artist: &str) -> Value {
    json!({
        "type": "album",
        "uri": format!("spotify:album:{id}"),
        "name": name,
        "artists": [{"name": artist}],
    })
}

pub fn artist(id: &str, name: &str) -> Value {
    json!({
        "type": "artist",
        "uri": format!("spotify:artist:{id}"),
        "name": name,
    })
}

pub fn playlist(id: &str, name: &str, owner: &str) -> Value {
    json!({
        "type": "playlist",
        "uri": format!("spotify:playlist:{id}"),
        "name": name,
        "owner": {"id": owner},
    })
}

pub fn page(items: Vec<Value>) -> Option<Value> {
    Some(json!({ "items": items }))
}
