use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    Res,
    config::{self, BrowseConfig},
    management::TokenManager,
    utils::{self, ITEMS},
};

use super::{CatalogClient, Link, PageStream};

/// Maximum number of album IDs the `/albums` endpoint accepts per request.
const ALBUMS_PER_REQUEST: usize = 20;

/// Release groups listed when browsing an artist.
const ARTIST_ALBUM_GROUPS: &str = "album,single";

/// [`CatalogClient`] talking to the Spotify Web API over HTTPS.
///
/// The client never refreshes or acquires tokens itself. Without a token it
/// reports `logged_in() == false`, which makes every dynamic browse branch
/// return an empty listing before any request is made.
pub struct WebClient {
    http: Client,
    api_url: String,
    token: Option<String>,
    config: BrowseConfig,
}

impl WebClient {
    pub fn new(token: Option<String>, config: BrowseConfig) -> Self {
        WebClient {
            http: Client::new(),
            api_url: config::spotify_apiurl(),
            token,
            config,
        }
    }

    /// Creates a client using the best token available.
    ///
    /// `SPOTIFY_ACCESS_TOKEN` wins over the cached token file. An expired
    /// cached token is ignored, leaving the client logged out.
    ///
    /// # Example
    ///
    /// ```
    /// let client = WebClient::from_env(BrowseConfig::from_env()).await;
    /// if !client.logged_in() {
    ///     warning!("No valid token found, only static directories are available");
    /// }
    /// ```
    pub async fn from_env(config: BrowseConfig) -> Self {
        let token = match config::spotify_access_token() {
            Some(token) => Some(token),
            None => match TokenManager::load().await {
                Ok(mgr) if !mgr.is_expired() => Some(mgr.current_token().access_token.clone()),
                Ok(_) => {
                    tracing::info!("Cached token has expired");
                    None
                }
                Err(e) => {
                    tracing::debug!("No cached token available: {}", e);
                    None
                }
            },
        };

        Self::new(token, config)
    }

    /// Points the client at another Web API base URL.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!(
                "{uri}/{path}",
                uri = self.api_url,
                path = path.trim_start_matches('/')
            )
        }
    }

    fn market(&self) -> (String, String) {
        ("market".to_string(), self.config.market.clone())
    }

    async fn send(&self, url: &str, params: &[(String, String)]) -> Res<reqwest::Response> {
        let token = self.token.as_deref().ok_or("Not logged in to Spotify")?;
        let response = self
            .http
            .get(url)
            .query(params)
            .bearer_auth(token)
            .send()
            .await?;
        Ok(response)
    }

    async fn get_json(&self, url: &str, params: &[(String, String)]) -> Res<Value> {
        let response = self.send(url, params).await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    /// Like `get_json`, but maps `404 Not Found` to `None`.
    async fn get_json_opt(&self, url: &str, params: &[(String, String)]) -> Res<Option<Value>> {
        let response = self.send(url, params).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let json = response.error_for_status()?.json::<Value>().await?;
        Ok(Some(json))
    }

    /// Completes the `tracks.items` listing embedded in an album or playlist
    /// by following `tracks.next` until the last track page.
    async fn with_all_tracks(&self, mut container: Value) -> Res<Value> {
        let mut next = container
            .pointer("/tracks/next")
            .and_then(Value::as_str)
            .map(str::to_string);

        while let Some(url) = next {
            let page = self.get_json(&url, &[]).await?;
            next = utils::next_page_url(&page);

            if let (Some(Value::Array(items)), Some(Value::Array(all))) =
                (page.get("items"), container.pointer_mut("/tracks/items"))
            {
                all.extend(items.iter().cloned());
            }
        }

        if let Some(tracks_next) = container.pointer_mut("/tracks/next") {
            *tracks_next = Value::Null;
        }

        Ok(container)
    }
}

#[async_trait]
impl CatalogClient for WebClient {
    fn logged_in(&self) -> bool {
        self.token.is_some()
    }

    async fn get_albums(&self, links: &[Link]) -> Res<Vec<Value>> {
        let mut albums = Vec::new();

        for chunk in links.chunks(ALBUMS_PER_REQUEST) {
            let album_ids = chunk
                .iter()
                .map(|l| l.id.as_str())
                .collect::<Vec<_>>()
                .join(",");

            let params = [("ids".to_string(), album_ids), self.market()];
            let json = self.get_json(&self.endpoint("albums"), &params).await?;

            let Some(Value::Array(found)) = json.get("albums") else {
                continue;
            };
            for album in found.iter().filter(|a| !a.is_null()) {
                albums.push(self.with_all_tracks(album.clone()).await?);
            }
        }

        Ok(albums)
    }

    async fn get_artist_top_tracks(&self, link: &Link) -> Res<Vec<Value>> {
        let url = self.endpoint(&format!("artists/{id}/top-tracks", id = link.id));
        let json = self.get_json(&url, &[self.market()]).await?;

        Ok(json
            .get("tracks")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_artist_albums(&self, link: &Link, all_tracks: bool) -> Res<Vec<Value>> {
        let params = HashMap::from([
            (
                "include_groups".to_string(),
                ARTIST_ALBUM_GROUPS.to_string(),
            ),
            self.market(),
            ("limit".to_string(), self.config.page_limit.to_string()),
        ]);

        let path = format!("artists/{id}/albums", id = link.id);
        let albums = utils::collect_items(self.get_all(&path, &params), ITEMS).await?;

        if !all_tracks {
            return Ok(albums);
        }

        let links: Vec<Link> = albums
            .iter()
            .filter_map(|a| a.get("uri").and_then(Value::as_str))
            .filter_map(|uri| Link::from_uri(uri).ok())
            .collect();
        self.get_albums(&links).await
    }

    async fn get_playlist(&self, link: &Link) -> Res<Option<Value>> {
        let url = self.endpoint(&format!("playlists/{id}", id = link.id));
        match self.get_json_opt(&url, &[self.market()]).await? {
            Some(playlist) => Ok(Some(self.with_all_tracks(playlist).await?)),
            None => Ok(None),
        }
    }

    fn get_all<'a>(&'a self, path: &str, params: &HashMap<String, String>) -> PageStream<'a> {
        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let first = Some((self.endpoint(path), params));

        // Follow-up URLs returned by the API already carry the query.
        Box::pin(stream::unfold(first, move |state| async move {
            let (url, params) = state?;
            match self.get_json(&url, &params).await {
                Ok(Value::Null) => Some((Ok(None), None)),
                Ok(page) => {
                    let next = utils::next_page_url(&page).map(|n| (n, Vec::new()));
                    Some((Ok(Some(page)), next))
                }
                Err(e) => Some((Err(e), None)),
            }
        }))
    }
}
