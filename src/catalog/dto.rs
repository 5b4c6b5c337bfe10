//! JioSaavn API Data Transfer Objects
//!
//! These types match what the `api.php` endpoints return for `api_version=4`.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! Fields the formatters cannot work without (`image`, `more_info`, ...) are
//! required here, so a malformed payload fails at decode time instead of deep
//! inside a formatter. Everything the upstream omits for edge-case entities
//! is optional.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// `search.getResults` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub results: Option<Vec<Song>>,
}

/// `song.getDetails` and `webapi.get` (type=song) response.
///
/// Only the first song is ever used, so the entries stay raw until then.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongsResponse {
    pub songs: Option<Vec<serde_json::Value>>,
}

impl SongsResponse {
    /// Decode the first song, if there is one
    pub fn first(self) -> Result<Option<Song>, serde_json::Error> {
        self.songs
            .and_then(|songs| songs.into_iter().next())
            .map(serde_json::from_value)
            .transpose()
    }
}

/// A song record as it appears in every listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub perma_url: Option<String>,
    /// Artwork URL, 150x150 variant
    pub image: String,
    pub more_info: SongInfo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongInfo {
    /// Upstream `duration` in seconds, stored as milliseconds. The API sends
    /// a string ("213") but numbers show up too.
    #[serde(rename = "duration", default, deserialize_with = "milliseconds")]
    pub duration_ms: u64,
    /// Album name
    pub album: Option<String>,
    pub album_url: Option<String>,
    pub encrypted_media_url: Option<String>,
    #[serde(rename = "artistMap")]
    pub artist_map: Option<ArtistMap>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistMap {
    #[serde(default)]
    pub primary_artists: Vec<ArtistRef>,
}

/// Artist reference embedded in a song
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub perma_url: Option<String>,
    pub image: Option<String>,
}

/// `webapi.get` (type=album) response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub perma_url: Option<String>,
    pub image: String,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "song_list")]
    pub list: Vec<Song>,
    #[serde(default, deserialize_with = "count")]
    pub list_count: Option<u32>,
}

/// `webapi.get` (type=artist) response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
    pub urls: ArtistUrls,
    pub image: String,
    #[serde(rename = "topSongs", default, deserialize_with = "song_list")]
    pub top_songs: Vec<Song>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistUrls {
    pub overview: String,
}

/// `webapi.get` (type=playlist) response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Playlist {
    pub title: String,
    pub perma_url: Option<String>,
    pub image: String,
    #[serde(default, deserialize_with = "song_list")]
    pub list: Vec<Song>,
    #[serde(default, deserialize_with = "count")]
    pub list_count: Option<u32>,
}

/// `webradio.createEntityStation` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationResponse {
    pub stationid: Option<String>,
}

/// `webradio.getSong` response.
///
/// A map of arbitrary keys ("0", "1", ...) to entries. Most entries wrap a
/// song, but the map also carries bookkeeping values like the station id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StationFeed(pub serde_json::Map<String, serde_json::Value>);

impl StationFeed {
    /// Songs in document order. Entries whose `song` is missing or not an
    /// object (`null`, `false`, `""`, ...) are skipped.
    pub fn songs(&self) -> Result<Vec<Song>, serde_json::Error> {
        self.0
            .values()
            .filter_map(|entry| entry.get("song"))
            .filter(|song| song.is_object())
            .map(Song::deserialize)
            .collect()
    }
}

// ============================================================================
// Lenient field decoders
// ============================================================================

/// Numeric fields come as strings or numbers depending on the endpoint
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Float(f) if f.is_finite() && f >= 0.0 => Ok(f.round() as u64),
            Self::Float(f) => Err(E::custom(format!("invalid number: {f}"))),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(0);
                }
                s.parse()
                    .map_err(|_| E::custom(format!("invalid number: {s:?}")))
            }
        }
    }
}

/// Seconds to milliseconds. Fractions survive; lengths past `u64` are rejected.
fn milliseconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let Some(value) = Option::<NumberOrText>::deserialize(deserializer)? else {
        return Ok(0);
    };

    let ms = match value {
        NumberOrText::Integer(secs) => secs.checked_mul(1000),
        NumberOrText::Float(secs) => scale_seconds(secs),
        NumberOrText::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0)
            } else if let Ok(secs) = s.parse::<u64>() {
                secs.checked_mul(1000)
            } else {
                let secs: f64 = s
                    .parse()
                    .map_err(|_| de::Error::custom(format!("invalid duration: {s:?}")))?;
                scale_seconds(secs)
            }
        }
    };

    ms.ok_or_else(|| de::Error::custom("duration out of range"))
}

fn scale_seconds(secs: f64) -> Option<u64> {
    let ms = (secs * 1000.0).round();
    (ms.is_finite() && ms >= 0.0 && ms < u64::MAX as f64).then_some(ms as u64)
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let Some(value) = Option::<NumberOrText>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let n = value.into_u64::<D::Error>()?;
    u32::try_from(n)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("count out of range: {n}")))
}

/// Song lists: the API sends `""` instead of `[]` for empty collections
fn song_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Song>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrBlank {
        List(Vec<Song>),
        Blank(String),
    }

    match Option::<ListOrBlank>::deserialize(deserializer)? {
        Some(ListOrBlank::List(songs)) => Ok(songs),
        Some(ListOrBlank::Blank(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(ListOrBlank::Blank(s)) => Err(de::Error::custom(format!(
            "expected a song list, got {s:?}"
        ))),
        None => Ok(Vec::new()),
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
