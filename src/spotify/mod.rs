//! # Spotify Integration Module
//!
//! This module is the boundary between the browse core and the Spotify Web API.
//! It defines the [`CatalogClient`] contract the resolver consumes, the [`Link`]
//! identifier parser, a `reqwest` based [`WebClient`] implementing the contract,
//! and the playlist listing used for playlist and user-scoped URIs.
//!
//! ## Architecture
//!
//! ```text
//! Browse Layer (routing, static tree, translation)
//!          ↓
//! Spotify Integration Layer
//!     ├── CatalogClient (contract)
//!     ├── Link (URI → identifier)
//!     ├── WebClient (HTTP implementation)
//!     └── Playlist listing
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Raw Records
//!
//! Catalog records are handed around as [`serde_json::Value`]. Their shape
//! belongs to the Web API; the translator only reads the handful of fields
//! it needs and skips anything it does not recognise.
//!
//! ## Pagination
//!
//! [`CatalogClient::get_all`] returns a [`PageStream`]. Pages are pulled one at
//! a time: the next request is only issued once the consumer polls for it, and
//! a stream is never replayed. Each item is `Option<Value>` because the API
//! (or a fake) may hand back an empty page, which consumers must skip.
//!
//! ## Error Types
//!
//! All transport functions return [`crate::Res`]. Network failures and API
//! errors are not retried here; they propagate to whoever called `browse`.
//!
//! ## Endpoints Used
//!
//! - `GET /albums` - Batch album information with track listings
//! - `GET /artists/{id}/top-tracks` - An artist's most popular tracks
//! - `GET /artists/{id}/albums` - An artist's discography
//! - `GET /playlists/{id}` - Playlist details with track pages
//! - `GET /me/top/{tracks,artists}` - The user's top items
//! - `GET /me/{tracks,albums}` - The user's saved library
//! - `GET /browse/featured-playlists` - Editorial playlists

use std::{collections::HashMap, pin::Pin};

use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use crate::Res;

mod client;
mod link;
pub mod playlist;

pub use client::WebClient;
pub use link::{Link, LinkError, LinkKind};

/// Lazy sequence of pages returned by [`CatalogClient::get_all`].
pub type PageStream<'a> = Pin<Box<dyn Stream<Item = Res<Option<Value>>> + Send + 'a>>;

/// Remote catalog access as seen by the browse core.
///
/// Implementations own their session state and its synchronization;
/// the core only ever reads `logged_in` and issues the calls below.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Whether the client currently holds a usable session.
    fn logged_in(&self) -> bool;

    /// Full album objects for `links`, in request order. Albums the catalog
    /// does not know are left out.
    async fn get_albums(&self, links: &[Link]) -> Res<Vec<Value>>;

    async fn get_artist_top_tracks(&self, link: &Link) -> Res<Vec<Value>>;

    /// Albums of an artist. With `all_tracks`, each album carries its full
    /// track listing under `tracks.items`.
    async fn get_artist_albums(&self, link: &Link, all_tracks: bool) -> Res<Vec<Value>>;

    /// Playlist object with every track page merged into `tracks.items`,
    /// or `None` when the playlist does not exist.
    async fn get_playlist(&self, link: &Link) -> Res<Option<Value>>;

    /// Pages of `path` (relative to the API base URL) queried with `params`.
    fn get_all<'a>(&'a self, path: &str, params: &HashMap<String, String>) -> PageStream<'a>;
}
