//! JioSaavn catalog integration - fetches songs, albums, artists, playlists and
//! recommendations and reshapes them into a stable schema.
//!
//! # Architecture
//!
//! Same separation as any external API integration in this crate:
//! - **Domain models** (`domain.rs`) - Output types callers depend on
//! - **API DTOs** (`dto.rs`) - Exact upstream response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Request** (`request.rs`) - `api.php` query-string builder
//! - **Transport** (`transport.rs`) - HTTP seam, swappable in tests
//! - **Client** (`client.rs`) - The query methods
//! - **Extract** (`extract.rs`) - Share-link token parsing, no network
//!
//! # Usage
//!
//! ```ignore
//! use saavn_catalog::catalog::{CatalogClient, extract};
//!
//! let client = CatalogClient::new()?;
//! let found = client.search("kesariya").await?;
//! println!("{} results", found.results.len());
//!
//! if let Some(token) = extract::playlist("https://www.jiosaavn.com/featured/x/abc123") {
//!     let playlist = client.get_playlist(token, Some(25)).await?;
//! }
//! ```

mod adapter;
mod client;
pub mod domain;
pub mod dto;
pub mod extract;
mod request;
pub mod transport;

pub use client::{
    CatalogClient, DEFAULT_ARTIST_SONG_COUNT, DEFAULT_BASE_URL, DEFAULT_PLAYLIST_LIMIT,
    DEFAULT_RECOMMENDATION_LIMIT, Fetched, USER_AGENT,
};
pub use domain::{
    Album, AlbumResult, Artist, ArtistResult, CatalogError, Playlist, PlaylistResult,
    Recommendations, SearchResults, Track, TrackResult,
};
pub use extract::EntityKind;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
