//! Share-link parsing.
//!
//! Pulls the trailing token out of JioSaavn share URLs such as
//! `https://www.jiosaavn.com/song/kesariya/OgwhbhtDRwM`. Offline and pure.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Kinds of entity a share link can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Album,
    Artist,
    Playlist,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [Self::Track, Self::Album, Self::Artist, Self::Playlist];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown entity kind: {s}"))
    }
}

/// One pattern per kind; capture group 1 is the token
static PATTERNS: LazyLock<Vec<(EntityKind, Regex)>> = LazyLock::new(|| {
    [
        (EntityKind::Track, r"jiosaavn\.com/song/[^/]+/([^/]+)$"),
        (EntityKind::Album, r"jiosaavn\.com/album/[^/]+/([^/]+)$"),
        (EntityKind::Artist, r"jiosaavn\.com/artist/[^/]+/([^/]+)$"),
        (
            EntityKind::Playlist,
            r"(?:jiosaavn\.com|saavn\.com)/(?:featured|s/playlist)/[^/]+/([^/]+)$",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        (
            kind,
            Regex::new(pattern).expect("share link patterns are valid"),
        )
    })
    .collect()
});

/// Extract the token for `kind` from `url`, or `None` if the URL has a different shape.
pub fn extract(kind: EntityKind, url: &str) -> Option<&str> {
    PATTERNS
        .iter()
        .find(|(k, _)| *k == kind)
        .and_then(|(_, regex)| regex.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Find the first kind whose pattern matches `url`
pub fn detect(url: &str) -> Option<(EntityKind, &str)> {
    EntityKind::ALL
        .into_iter()
        .find_map(|kind| extract(kind, url).map(|token| (kind, token)))
}

pub fn track(url: &str) -> Option<&str> {
    extract(EntityKind::Track, url)
}

pub fn album(url: &str) -> Option<&str> {
    extract(EntityKind::Album, url)
}

pub fn artist(url: &str) -> Option<&str> {
    extract(EntityKind::Artist, url)
}

pub fn playlist(url: &str) -> Option<&str> {
    extract(EntityKind::Playlist, url)
}
