//! Normalized catalog models.
//!
//! These types are OUR types - they don't change when the upstream API changes.
//! Every response gets converted into these via the adapter. Field names
//! serialize in camelCase; callers depend on that shape.

use serde::{Deserialize, Serialize};

/// A single song in normalized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Catalog id of the song
    pub identifier: String,
    pub title: String,
    /// Duration in milliseconds
    pub length: u64,
    /// Canonical share URL
    pub uri: Option<String>,
    /// Highest resolution artwork variant
    pub artwork_url: String,
    /// Name of the first primary artist
    pub author: Option<String>,
    /// Opaque streaming reference, passed through untouched
    pub encrypted_media_url: Option<String>,
    pub album_url: Option<String>,
    pub artist_url: Option<String>,
    pub album_name: Option<String>,
    pub artist_artwork_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub uri: Option<String>,
    pub artwork_url: String,
    /// Subtitle line, usually the album artists
    pub author: Option<String>,
    pub tracks: Vec<Track>,
    pub total_songs: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    /// Artist overview page
    pub uri: String,
    pub artwork_url: String,
    /// Top songs, capped server-side
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub title: String,
    pub uri: Option<String>,
    pub artwork_url: String,
    pub tracks: Vec<Track>,
    pub total_songs: Option<u32>,
}

// ============================================================================
// Wrapped results
// ============================================================================

/// Result of [`search`](super::CatalogClient::search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackResult {
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumResult {
    pub album: Album,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistResult {
    pub artist: Artist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub playlist: Playlist,
}

/// Result of [`get_recommendations`](super::CatalogClient::get_recommendations)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub tracks: Vec<Track>,
}

/// Errors surfaced by catalog calls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Upstream answered with a non-success status
    #[error("Request failed (HTTP {status})")]
    Upstream { status: u16 },

    #[error("{0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Body was not JSON, or not the shape we expect for this call
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP status this error maps to, when it has one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
