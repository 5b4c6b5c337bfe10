//! Test utilities and fixtures for saavn-catalog tests.
//!
//! Upstream fixtures are built as `serde_json::Value` so tests can poke
//! individual fields before handing them to a mock transport.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_client, song_json};
//!
//! let mock = MockTransport::new().on("song.getDetails", json!({ "songs": [song_json("a", "A")] }));
//! let client = mock_client(mock);
//! ```

use serde_json::{Value, json};

use crate::catalog::transport::mocks::MockTransport;
use crate::catalog::{CatalogClient, Track};

/// Base URL used by mock clients
pub const MOCK_BASE_URL: &str = "http://catalog.test/api.php";

/// A client that talks to `transport` instead of the network
pub fn mock_client(transport: MockTransport) -> CatalogClient<MockTransport> {
    CatalogClient::with_transport(transport, MOCK_BASE_URL)
}

/// A song record shaped like the upstream `api_version=4` payload.
///
/// Duration is "268" seconds, the primary artist is Arijit Singh and
/// the album is Brahmastra.
pub fn song_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "subtitle": "Arijit Singh - Brahmastra",
        "type": "song",
        "perma_url": format!("https://www.jiosaavn.com/song/{}/OgwhbhtDRwM", title.to_lowercase()),
        "image": "https://c.saavncdn.com/871/Brahmastra-Hindi-2022-150x150.jpg",
        "language": "hindi",
        "more_info": {
            "duration": "268",
            "album": "Brahmastra",
            "album_url": "https://www.jiosaavn.com/album/brahmastra/xe6Gx2yYlGE_",
            "encrypted_media_url": "ID2ieOjCrwfgWvL5sXl4B1ImC5QfbsDy",
            "artistMap": {
                "primary_artists": [{
                    "id": "459320",
                    "name": "Arijit Singh",
                    "role": "singer",
                    "image": "https://c.saavncdn.com/artists/Arijit_Singh_150x150.jpg",
                    "type": "artist",
                    "perma_url": "https://www.jiosaavn.com/artist/arijit-singh-songs/LlRWpHzy3Hk_"
                }],
                "featured_artists": [],
                "artists": []
            }
        }
    })
}

/// `webapi.get` type=album payload with two songs
pub fn album_json() -> Value {
    json!({
        "id": "23241654",
        "title": "Brahmastra",
        "subtitle": "Pritam, Arijit Singh",
        "type": "album",
        "perma_url": "https://www.jiosaavn.com/album/brahmastra/xe6Gx2yYlGE_",
        "image": "https://c.saavncdn.com/871/Brahmastra-Hindi-2022-150x150.jpg",
        "list_count": "2",
        "list": [song_json("3IoDK8qI", "Kesariya"), song_json("K1P4T0F8", "Deva Deva")]
    })
}

/// `webapi.get` type=artist payload with one top song
pub fn artist_json() -> Value {
    json!({
        "artistId": "459320",
        "name": "Arijit Singh",
        "image": "https://c.saavncdn.com/artists/Arijit_Singh_150x150.jpg",
        "urls": {
            "overview": "https://www.jiosaavn.com/artist/arijit-singh-songs/LlRWpHzy3Hk_"
        },
        "topSongs": [song_json("3IoDK8qI", "Kesariya")]
    })
}

/// `webapi.get` type=playlist payload
pub fn playlist_json() -> Value {
    json!({
        "id": "110858205",
        "title": "Weekly Top Songs",
        "type": "playlist",
        "perma_url": "https://www.jiosaavn.com/featured/weekly-top-songs/8MT-LQlP35c_",
        "image": "https://c.saavncdn.com/editorial/WeeklyTop_150x150.jpg",
        "list_count": 30,
        "list": [song_json("3IoDK8qI", "Kesariya")]
    })
}

/// A formatted track with every field populated
pub fn mock_track(id: &str) -> Track {
    Track {
        identifier: id.to_string(),
        title: "Test Track".to_string(),
        length: 180_000,
        uri: Some(format!("https://www.jiosaavn.com/song/test-track/{id}")),
        artwork_url: "https://c.saavncdn.com/test-500x500.jpg".to_string(),
        author: Some("Test Artist".to_string()),
        encrypted_media_url: Some("encrypted".to_string()),
        album_url: Some("https://www.jiosaavn.com/album/test-album/abc".to_string()),
        artist_url: Some("https://www.jiosaavn.com/artist/test-artist/def".to_string()),
        album_name: Some("Test Album".to_string()),
        artist_artwork_url: Some("https://c.saavncdn.com/artists/test-500x500.jpg".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dto;

    #[test]
    fn test_fixtures_decode() {
        serde_json::from_value::<dto::Song>(song_json("a", "A")).unwrap();
        serde_json::from_value::<dto::Album>(album_json()).unwrap();
        serde_json::from_value::<dto::Artist>(artist_json()).unwrap();
        serde_json::from_value::<dto::Playlist>(playlist_json()).unwrap();
    }
}
