use std::fmt;

use crate::spotify::Link;

const USER_PREFIX: &str = "spotify:user:";
const PLAYLIST_PREFIX: &str = "spotify:playlist:";
const ALBUM_PREFIX: &str = "spotify:album:";
const ARTIST_PREFIX: &str = "spotify:artist:";
const TOP_PREFIX: &str = "spotify:top:";
const YOUR_PREFIX: &str = "spotify:your:";
const PLAYLISTS_PREFIX: &str = "spotify:playlists:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopList {
    Tracks,
    Artists,
}

impl TopList {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopList::Tracks => "tracks",
            TopList::Artists => "artists",
        }
    }
}

impl fmt::Display for TopList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YourMusic {
    Tracks,
    Albums,
}

impl YourMusic {
    pub fn as_str(&self) -> &'static str {
        match self {
            YourMusic::Tracks => "tracks",
            YourMusic::Albums => "albums",
        }
    }
}

impl fmt::Display for YourMusic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a dynamic browse URI leads.
///
/// Parsing is pure; nothing here touches the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `spotify:playlist:..` or `spotify:user:..`, handed to the playlist listing.
    Playlist(String),
    Album(Link),
    Artist(Link),
    TopList(TopList),
    YourMusic(YourMusic),
    FeaturedPlaylists,
    /// A recognised namespace with a variant that has nothing to list.
    Empty,
    /// A recognised namespace whose URI could not be parsed.
    Invalid(String),
    Unknown,
}

impl Route {
    pub fn parse(uri: &str) -> Route {
        if uri.starts_with(USER_PREFIX) || uri.starts_with(PLAYLIST_PREFIX) {
            return Route::Playlist(uri.to_string());
        }

        if uri.starts_with(ALBUM_PREFIX) {
            return match Link::from_uri(uri) {
                Ok(link) => Route::Album(link),
                Err(e) => Route::Invalid(e.to_string()),
            };
        }

        if uri.starts_with(ARTIST_PREFIX) {
            return match Link::from_uri(uri) {
                Ok(link) => Route::Artist(link),
                Err(e) => Route::Invalid(e.to_string()),
            };
        }

        if let Some(rest) = uri.strip_prefix(TOP_PREFIX) {
            return match segments(rest).as_slice() {
                ["tracks"] => Route::TopList(TopList::Tracks),
                ["artists"] => Route::TopList(TopList::Artists),
                [_] => Route::Empty,
                _ => Route::Invalid("Toplist URI parsing failed".to_string()),
            };
        }

        // Unlike top lists, a wrong segment count here is an unknown URI.
        if let Some(rest) = uri.strip_prefix(YOUR_PREFIX) {
            match segments(rest).as_slice() {
                ["tracks"] => return Route::YourMusic(YourMusic::Tracks),
                ["albums"] => return Route::YourMusic(YourMusic::Albums),
                [_] => return Route::Empty,
                _ => {}
            }
        }

        if let Some(rest) = uri.strip_prefix(PLAYLISTS_PREFIX) {
            match segments(rest).as_slice() {
                ["featured"] => return Route::FeaturedPlaylists,
                [_] => return Route::Empty,
                _ => {}
            }
        }

        Route::Unknown
    }
}

/// Colon separated segments of a URI remainder. An empty remainder is a
/// single empty segment, so `spotify:top:` is an unsupported top list.
fn segments(rest: &str) -> Vec<&str> {
    rest.split(':').collect()
}
