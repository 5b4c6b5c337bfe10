//! JioSaavn catalog client
//!
//! Handles communication with the public `api.php` endpoints.
//! Each method is one linear pass: build the URL, fetch, validate, format.
//! Only recommendations make two calls, strictly in sequence.
//!
//! IMPORTANT: the station endpoints only answer for the Android context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::domain::{
    AlbumResult, ArtistResult, CatalogError, PlaylistResult, Recommendations, SearchResults,
    TrackResult,
};
use super::request::{ApiRequest, Context};
use super::transport::{HttpTransport, ReqwestTransport};
use super::{adapter, dto};
use crate::config::CatalogConfig;

pub const DEFAULT_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

/// Page size for playlists when the caller doesn't pass one
pub const DEFAULT_PLAYLIST_LIMIT: u32 = 100;

/// Feed size for recommendations when the caller doesn't pass one
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;

/// How many top songs to ask for on artist lookups
pub const DEFAULT_ARTIST_SONG_COUNT: u32 = 50;

/// User agent string
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Parsed body plus the upstream success flag
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub ok: bool,
}

/// JioSaavn catalog client
///
/// Holds no per-request state; build one and share it.
pub struct CatalogClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    artist_song_count: u32,
}

impl CatalogClient<ReqwestTransport> {
    /// Create a client against the public endpoint
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_config(&CatalogConfig::default())
    }

    /// Create a client from the `[catalog]` config section
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self {
            transport,
            base_url: config.base_url.clone(),
            artist_song_count: config.artist_song_count,
        })
    }
}

impl<T: HttpTransport> CatalogClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            artist_song_count: DEFAULT_ARTIST_SONG_COUNT,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search songs. Results keep the upstream ranking order.
    pub async fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        let request = ApiRequest::new("search.getResults", Context::Web)
            .param("cc", "in")
            .param("includeMetaTags", 1)
            .param("q", query);

        let Fetched { data, .. } = self.request::<dto::SearchResponse>(&request).await?;

        match data.results {
            Some(songs) if !songs.is_empty() => Ok(SearchResults {
                results: adapter::to_tracks(songs),
            }),
            _ => Err(CatalogError::not_found(format!(
                "No results found for \"{query}\""
            ))),
        }
    }

    /// Look up a song by its internal catalog id
    pub async fn get_track_by_id(&self, id: &str) -> Result<TrackResult, CatalogError> {
        let request = ApiRequest::new("song.getDetails", Context::Web).param("pids", id);
        self.fetch_song(&request).await
    }

    /// Look up a song by the token embedded in its share link
    pub async fn get_track(&self, token: &str) -> Result<TrackResult, CatalogError> {
        let request = ApiRequest::new("webapi.get", Context::Web)
            .param("token", token)
            .param("type", "song");
        self.fetch_song(&request).await
    }

    pub async fn get_album(&self, token: &str) -> Result<AlbumResult, CatalogError> {
        let request = ApiRequest::new("webapi.get", Context::Web)
            .param("token", token)
            .param("type", "album");

        let album: dto::Album = self.fetch_entity(&request, "Album not found").await?;
        Ok(AlbumResult {
            album: adapter::to_album(album),
        })
    }

    /// Artist overview with its top songs
    pub async fn get_artist(&self, token: &str) -> Result<ArtistResult, CatalogError> {
        let request = ApiRequest::new("webapi.get", Context::Web)
            .param("token", token)
            .param("type", "artist")
            .param("n_song", self.artist_song_count);

        let artist: dto::Artist = self.fetch_entity(&request, "Artist not found").await?;
        Ok(ArtistResult {
            artist: adapter::to_artist(artist),
        })
    }

    /// Playlist with up to `limit` songs (default 100)
    pub async fn get_playlist(
        &self,
        token: &str,
        limit: Option<u32>,
    ) -> Result<PlaylistResult, CatalogError> {
        let request = ApiRequest::new("webapi.get", Context::Web)
            .param("token", token)
            .param("type", "playlist")
            .param("n", limit.unwrap_or(DEFAULT_PLAYLIST_LIMIT));

        let playlist: dto::Playlist = self.fetch_entity(&request, "Playlist not found").await?;
        Ok(PlaylistResult {
            playlist: adapter::to_playlist(playlist),
        })
    }

    /// Songs related to `id`, up to `limit` (default 10).
    ///
    /// Resolves a station first; the song feed is never requested when that
    /// fails. An empty feed is not an error.
    pub async fn get_recommendations(
        &self,
        id: &str,
        limit: Option<u32>,
    ) -> Result<Recommendations, CatalogError> {
        let Some(station_id) = self.get_station(id).await? else {
            return Err(CatalogError::not_found("No station ID found"));
        };

        let request = ApiRequest::new("webradio.getSong", Context::Android)
            .param("stationid", &station_id)
            .param("k", limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT));

        let Fetched { data, .. } = self.request::<dto::StationFeed>(&request).await?;
        let songs = data
            .songs()
            .map_err(|e| CatalogError::Decode(format!("{}: {}", request.call(), e)))?;

        tracing::debug!(station = %station_id, count = songs.len(), "Station feed received");

        Ok(Recommendations {
            tracks: adapter::to_tracks(songs),
        })
    }

    /// Create a queue station seeded with `identifier`
    async fn get_station(&self, identifier: &str) -> Result<Option<String>, CatalogError> {
        let entity_id = serde_json::json!([identifier]).to_string();
        let request = ApiRequest::new("webradio.createEntityStation", Context::Android)
            .param("entity_id", entity_id)
            .param("entity_type", "queue");

        let Fetched { data, .. } = self.request::<dto::StationResponse>(&request).await?;
        Ok(data.stationid.filter(|id| !id.is_empty()))
    }

    /// Shared path for the two song lookups: first song wins
    async fn fetch_song(&self, request: &ApiRequest) -> Result<TrackResult, CatalogError> {
        let Fetched { data, .. } = self.request::<dto::SongsResponse>(request).await?;

        let song = data
            .first()
            .map_err(|e| CatalogError::Decode(format!("{}: {}", request.call(), e)))?
            .ok_or_else(|| CatalogError::not_found("Track not found"))?;

        Ok(TrackResult {
            track: adapter::to_track(song),
        })
    }

    /// Fetch a `webapi.get` entity; an absent payload is a not-found
    async fn fetch_entity<D: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        not_found: &str,
    ) -> Result<D, CatalogError> {
        let Fetched { data, .. } = self.request::<Value>(request).await?;

        if is_absent(&data) {
            return Err(CatalogError::not_found(not_found));
        }

        serde_json::from_value(data)
            .map_err(|e| CatalogError::Decode(format!("{}: {}", request.call(), e)))
    }

    /// Send the HTTP request and parse the response
    async fn request<D: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<Fetched<D>, CatalogError> {
        let url = request.url(&self.base_url);
        tracing::debug!(call = request.call(), %url, "Catalog request");

        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            tracing::warn!(
                call = request.call(),
                status = response.status,
                "Catalog request failed"
            );
            return Err(CatalogError::Upstream {
                status: response.status,
            });
        }

        let data = serde_json::from_str(&response.body)
            .map_err(|e| CatalogError::Decode(format!("{}: {}", request.call(), e)))?;

        Ok(Fetched {
            data,
            ok: response.is_success(),
        })
    }
}

/// Falsy payloads: null, false, "", {} and []
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Number(_) => false,
    }
}
