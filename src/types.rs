use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Kind of a browse listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Directory,
    Track,
    Album,
    Artist,
    Playlist,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RefKind::Directory => "directory",
            RefKind::Track => "track",
            RefKind::Album => "album",
            RefKind::Artist => "artist",
            RefKind::Playlist => "playlist",
        };
        f.write_str(s)
    }
}

/// A lightweight reference to a browsable node or a leaf item.
///
/// The kind is fixed by the constructor that built the entry and is never
/// re-derived from the URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    pub uri: String,
    pub name: String,
    pub kind: RefKind,
}

impl Ref {
    fn new(kind: RefKind, uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn directory(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(RefKind::Directory, uri, name)
    }

    pub fn track(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(RefKind::Track, uri, name)
    }

    pub fn album(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(RefKind::Album, uri, name)
    }

    pub fn artist(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(RefKind::Artist, uri, name)
    }

    pub fn playlist(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(RefKind::Playlist, uri, name)
    }
}

#[derive(Tabled)]
pub struct RefTableRow {
    pub kind: String,
    pub name: String,
    pub uri: String,
}

impl From<Ref> for RefTableRow {
    fn from(r: Ref) -> Self {
        RefTableRow {
            kind: r.kind.to_string(),
            name: r.name,
            uri: r.uri,
        }
    }
}
