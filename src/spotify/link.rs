use std::fmt;

use reqwest::Url;
use thiserror::Error;

const URI_SCHEME: &str = "spotify";
const WEB_HOST: &str = "open.spotify.com";

/// Errors raised while turning a URI into a [`Link`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Could not parse {0:?} as a Spotify URI")]
    Unrecognized(String),

    #[error("Unsupported Spotify link type {0:?}")]
    UnsupportedType(String),

    #[error("Invalid Spotify ID {0:?}")]
    InvalidId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Album,
    Artist,
    Track,
    Playlist,
}

impl LinkKind {
    fn parse(s: &str) -> Result<Self, LinkError> {
        match s {
            "album" => Ok(LinkKind::Album),
            "artist" => Ok(LinkKind::Artist),
            "track" => Ok(LinkKind::Track),
            "playlist" => Ok(LinkKind::Playlist),
            other => Err(LinkError::UnsupportedType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Album => "album",
            LinkKind::Artist => "artist",
            LinkKind::Track => "track",
            LinkKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Canonical `spotify:<kind>:<id>` form.
    pub uri: String,
    pub kind: LinkKind,
    pub id: String,
    /// Owner of a user-scoped playlist URI.
    pub owner: Option<String>,
}

impl Link {
    /// Parses `spotify:` URIs and `https://open.spotify.com/` URLs.
    ///
    /// Accepted shapes:
    /// - `spotify:<kind>:<id>`
    /// - `spotify:user:<owner>:playlist:<id>`
    /// - `https://open.spotify.com/<kind>/<id>` (query ignored)
    /// - `https://open.spotify.com/user/<owner>/playlist/<id>`
    pub fn from_uri(uri: &str) -> Result<Self, LinkError> {
        let segments: Vec<String> = if let Some(rest) = uri
            .strip_prefix(URI_SCHEME)
            .and_then(|r| r.strip_prefix(':'))
        {
            rest.split(':').map(str::to_string).collect()
        } else {
            web_segments(uri)?
        };

        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        match segments.as_slice() {
            ["user", owner, "playlist", id] if !owner.is_empty() => {
                Self::build(LinkKind::Playlist, id, Some(owner.to_string()))
            }
            [kind, id] => Self::build(LinkKind::parse(kind)?, id, None),
            _ => Err(LinkError::Unrecognized(uri.to_string())),
        }
    }

    fn build(kind: LinkKind, id: &str, owner: Option<String>) -> Result<Self, LinkError> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LinkError::InvalidId(id.to_string()));
        }

        Ok(Link {
            uri: format!("{URI_SCHEME}:{kind}:{id}"),
            kind,
            id: id.to_string(),
            owner,
        })
    }
}

fn web_segments(uri: &str) -> Result<Vec<String>, LinkError> {
    let unrecognized = || LinkError::Unrecognized(uri.to_string());

    let url = Url::parse(uri).map_err(|_| unrecognized())?;
    if url.scheme() != "https" || url.host_str() != Some(WEB_HOST) {
        return Err(unrecognized());
    }

    let segments = url
        .path_segments()
        .ok_or_else(unrecognized)?
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    Ok(segments)
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
