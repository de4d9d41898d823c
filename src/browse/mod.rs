//! # Browse Module
//!
//! Resolves a `spotify:` URI into the ordered list of entries found "inside" it.
//! The hierarchy is partly static and partly backed by the catalog:
//!
//! ```text
//! spotify:directory                     Spotify
//! ├── spotify:top                       Top lists
//! │   ├── spotify:top:tracks            → GET me/top/tracks
//! │   └── spotify:top:artists           → GET me/top/artists
//! ├── spotify:your                      Your music
//! │   ├── spotify:your:tracks           → GET me/tracks
//! │   └── spotify:your:albums           → GET me/albums
//! └── spotify:playlists                 Playlists
//!     └── spotify:playlists:featured    → GET browse/featured-playlists
//!
//! spotify:album:<id>                    → album tracks
//! spotify:artist:<id>                   → top tracks, then albums
//! spotify:playlist:<id>                 → playlist tracks
//! spotify:user:<id>:playlist:<id>       → playlist tracks
//! ```
//!
//! ## Resolution Order
//!
//! 1. **Static directories** are answered from [`StaticTree`] without any
//!    remote call, whether or not a client is available.
//! 2. **Authorization gate**: with no client, or a client that is not logged
//!    in, every other URI yields an empty listing.
//! 3. **Dynamic routes**: the URI is parsed into a [`Route`] and dispatched to
//!    the matching catalog fetch, whose records go through the translator.
//!
//! ## Error Policy
//!
//! Malformed URIs and unknown routes are logged at info level and produce an
//! empty listing. Transport errors raised by the [`CatalogClient`] are not
//! caught here and reach the caller through the returned [`Res`].
//!
//! ## Usage
//!
//! ```rust
//! let browser = Browser::new();
//! let config = BrowseConfig::from_env();
//! let client = WebClient::from_env(config.clone()).await;
//!
//! let refs = browser
//!     .browse(&config, Some(&client), "spotify:top:tracks")
//!     .await?;
//! ```

mod route;
mod tree;

use std::{collections::HashMap, slice};

use crate::{
    Res,
    config::BrowseConfig,
    spotify::{CatalogClient, Link, playlist},
    translator,
    types::Ref,
    utils::{self, ITEMS, PLAYLIST_ITEMS, TRACK_ITEMS},
};

pub use route::{Route, TopList, YourMusic};
pub use tree::{ROOT_URI, StaticNode, StaticTree};

/// Browse entry point holding the static tree.
///
/// Cheap to share: it holds no per-request state, so one instance can serve
/// any number of concurrent [`Browser::browse`] calls.
#[derive(Debug, Clone, Default)]
pub struct Browser {
    tree: StaticTree,
}

impl Browser {
    pub fn new() -> Self {
        Browser {
            tree: StaticTree::new(),
        }
    }

    pub fn tree(&self) -> &StaticTree {
        &self.tree
    }

    /// Lists the children of `uri`.
    ///
    /// # Arguments
    ///
    /// * `config` - Paging and market settings for catalog requests
    /// * `client` - Catalog access; `None` limits browsing to static directories
    /// * `uri` - The `spotify:` URI to list
    ///
    /// # Returns
    ///
    /// - `Ok(refs)` - The listing, empty when the URI is unknown, malformed,
    ///   or needs a session that is not available
    /// - `Err(..)` - A transport error raised by the catalog client
    ///
    /// # Ordering
    ///
    /// Entries keep the order the catalog returned them in, pages in page
    /// order. For artists, top tracks always come before albums.
    pub async fn browse(
        &self,
        config: &BrowseConfig,
        client: Option<&dyn CatalogClient>,
        uri: &str,
    ) -> Res<Vec<Ref>> {
        if let Some(children) = self.tree.children(uri) {
            return Ok(children.to_vec());
        }

        let client = match client {
            Some(client) if client.logged_in() => client,
            _ => return Ok(Vec::new()),
        };

        match Route::parse(uri) {
            Route::Playlist(uri) => playlist::lookup_items(client, &uri).await,
            Route::Album(link) => browse_album(client, &link).await,
            Route::Artist(link) => browse_artist(client, &link).await,
            Route::TopList(variant) => browse_top_list(client, config, variant).await,
            Route::YourMusic(variant) => browse_your_music(client, config, variant).await,
            Route::FeaturedPlaylists => browse_featured_playlists(client, config).await,
            Route::Empty => Ok(Vec::new()),
            Route::Invalid(reason) => {
                tracing::info!("Failed to browse {:?}: {}", uri, reason);
                Ok(Vec::new())
            }
            Route::Unknown => {
                tracing::info!("Failed to browse {:?}: Unknown URI type", uri);
                Ok(Vec::new())
            }
        }
    }
}

fn paging_params(config: &BrowseConfig, with_market: bool) -> HashMap<String, String> {
    let mut params = HashMap::from([("limit".to_string(), config.page_limit.to_string())]);
    if with_market {
        params.insert("market".to_string(), config.market.clone());
    }
    params
}

async fn browse_album(client: &dyn CatalogClient, link: &Link) -> Res<Vec<Ref>> {
    let albums = client.get_albums(slice::from_ref(link)).await?;

    Ok(albums
        .first()
        .map(|album| translator::to_track_refs(utils::items_at(album, TRACK_ITEMS), true))
        .unwrap_or_default())
}

async fn browse_artist(client: &dyn CatalogClient, link: &Link) -> Res<Vec<Ref>> {
    let (top_tracks, albums) = futures::try_join!(
        client.get_artist_top_tracks(link),
        client.get_artist_albums(link, false),
    )?;

    let mut refs = translator::to_track_refs(&top_tracks, true);
    refs.extend(translator::to_album_refs(&albums));
    Ok(refs)
}

async fn browse_top_list(
    client: &dyn CatalogClient,
    config: &BrowseConfig,
    variant: TopList,
) -> Res<Vec<Ref>> {
    let path = format!("me/top/{variant}");
    let pages = client.get_all(&path, &paging_params(config, false));
    let items = utils::collect_items(pages, ITEMS).await?;

    Ok(match variant {
        TopList::Tracks => translator::to_track_refs(&items, false),
        TopList::Artists => translator::to_artist_refs(&items),
    })
}

async fn browse_your_music(
    client: &dyn CatalogClient,
    config: &BrowseConfig,
    variant: YourMusic,
) -> Res<Vec<Ref>> {
    let path = format!("me/{variant}");
    let pages = client.get_all(&path, &paging_params(config, true));
    let items = utils::collect_items(pages, ITEMS).await?;

    Ok(match variant {
        YourMusic::Tracks => translator::to_track_refs(&items, true),
        YourMusic::Albums => translator::to_album_refs(&items),
    })
}

async fn browse_featured_playlists(
    client: &dyn CatalogClient,
    config: &BrowseConfig,
) -> Res<Vec<Ref>> {
    let pages = client.get_all("browse/featured-playlists", &paging_params(config, false));
    let items = utils::collect_items(pages, PLAYLIST_ITEMS).await?;

    Ok(translator::to_playlist_refs(&items, None))
}
