use std::collections::{HashMap, HashSet};

use crate::types::Ref;

pub const ROOT_URI: &str = "spotify:directory";

type Layout = &'static [(&'static str, &'static str, &'static [(&'static str, &'static str)])];

/// Directories under the root, each with its own fixed children.
const LAYOUT: Layout = &[
    (
        "spotify:top",
        "Top lists",
        &[
            ("spotify:top:tracks", "Top tracks"),
            ("spotify:top:artists", "Top artists"),
        ],
    ),
    (
        "spotify:your",
        "Your music",
        &[
            ("spotify:your:tracks", "Your tracks"),
            ("spotify:your:albums", "Your albums"),
        ],
    ),
    (
        "spotify:playlists",
        "Playlists",
        &[("spotify:playlists:featured", "Featured")],
    ),
];

/// A directory of the static tree. Nodes without children mark the point
/// where listings come from the catalog instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticNode {
    pub entry: Ref,
    pub children: Vec<StaticNode>,
}

impl StaticNode {
    fn leaf(uri: &str, name: &str) -> Self {
        StaticNode {
            entry: Ref::directory(uri, name),
            children: Vec::new(),
        }
    }
}

/// The fixed directory hierarchy served without any remote call.
///
/// Built once and never mutated, so a single instance can be shared by
/// concurrent browse requests as-is.
#[derive(Debug, Clone)]
pub struct StaticTree {
    root: StaticNode,
    listings: HashMap<String, Vec<Ref>>,
    uris: HashSet<String>,
}

impl StaticTree {
    pub fn new() -> Self {
        let root = StaticNode {
            entry: Ref::directory(ROOT_URI, "Spotify"),
            children: LAYOUT
                .iter()
                .map(|(uri, name, children)| StaticNode {
                    entry: Ref::directory(*uri, *name),
                    children: children
                        .iter()
                        .map(|(uri, name)| StaticNode::leaf(uri, name))
                        .collect(),
                })
                .collect(),
        };

        let mut listings = HashMap::new();
        let mut uris = HashSet::new();
        index(&root, &mut listings, &mut uris);

        StaticTree {
            root,
            listings,
            uris,
        }
    }

    pub fn root(&self) -> &Ref {
        &self.root.entry
    }

    pub fn root_node(&self) -> &StaticNode {
        &self.root
    }

    /// Fixed child listing of `uri`, if it is a static directory with children.
    pub fn children(&self, uri: &str) -> Option<&[Ref]> {
        self.listings.get(uri).map(Vec::as_slice)
    }

    /// Whether `uri` names any static directory, at any depth.
    pub fn contains(&self, uri: &str) -> bool {
        self.uris.contains(uri)
    }

    /// Every static directory entry, depth first, parents before children.
    pub fn entries(&self) -> Vec<&Ref> {
        let mut out = Vec::with_capacity(self.uris.len());
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(&node.entry);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

impl Default for StaticTree {
    fn default() -> Self {
        Self::new()
    }
}

fn index(node: &StaticNode, listings: &mut HashMap<String, Vec<Ref>>, uris: &mut HashSet<String>) {
    uris.insert(node.entry.uri.clone());
    if !node.children.is_empty() {
        listings.insert(
            node.entry.uri.clone(),
            node.children.iter().map(|c| c.entry.clone()).collect(),
        );
    }
    for child in &node.children {
        index(child, listings, uris);
    }
}
