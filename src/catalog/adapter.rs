//! Adapter layer: Convert JioSaavn DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! Structural validation already happened when the DTOs were decoded, so
//! everything here is infallible.

use super::domain::{Album, Artist, Playlist, Track};
use super::dto;

const LOW_RES: &str = "150x150";
const HIGH_RES: &str = "500x500";

/// Swap the first 150x150 artwork variant for the 500x500 one.
///
/// URLs without the marker pass through unchanged.
pub fn upgrade_artwork(url: &str) -> String {
    url.replacen(LOW_RES, HIGH_RES, 1)
}

/// The API uses empty strings for missing values
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn to_track(song: dto::Song) -> Track {
    let info = song.more_info;
    let primary = info
        .artist_map
        .and_then(|map| map.primary_artists.into_iter().next());

    let (author, artist_url, artist_artwork_url) = match primary {
        Some(artist) => (
            non_empty(artist.name),
            non_empty(artist.perma_url),
            non_empty(artist.image.as_deref().map(upgrade_artwork)),
        ),
        None => (None, None, None),
    };

    Track {
        identifier: song.id,
        title: song.title,
        length: info.duration_ms,
        uri: non_empty(song.perma_url),
        artwork_url: upgrade_artwork(&song.image),
        author,
        encrypted_media_url: non_empty(info.encrypted_media_url),
        album_url: non_empty(info.album_url),
        artist_url,
        album_name: non_empty(info.album),
        artist_artwork_url,
    }
}

pub fn to_tracks(songs: Vec<dto::Song>) -> Vec<Track> {
    songs.into_iter().map(to_track).collect()
}

pub fn to_album(album: dto::Album) -> Album {
    Album {
        id: album.id,
        name: album.title,
        uri: album.perma_url,
        artwork_url: upgrade_artwork(&album.image),
        author: album.subtitle,
        tracks: to_tracks(album.list),
        total_songs: album.list_count,
    }
}

pub fn to_artist(artist: dto::Artist) -> Artist {
    Artist {
        name: artist.name,
        uri: artist.urls.overview,
        artwork_url: upgrade_artwork(&artist.image),
        tracks: to_tracks(artist.top_songs),
    }
}

pub fn to_playlist(playlist: dto::Playlist) -> Playlist {
    Playlist {
        title: playlist.title,
        uri: playlist.perma_url,
        artwork_url: upgrade_artwork(&playlist.image),
        tracks: to_tracks(playlist.list),
        total_songs: playlist.list_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::song_json;
    use serde_json::json;

    fn make_song(id: &str, title: &str) -> dto::Song {
        serde_json::from_value(song_json(id, title)).unwrap()
    }

    #[test]
    fn test_upgrade_artwork_first_occurrence_only() {
        assert_eq!(
            upgrade_artwork("https://c.saavncdn.com/150x150/a-150x150.jpg"),
            "https://c.saavncdn.com/500x500/a-150x150.jpg"
        );
    }

    #[test]
    fn test_upgrade_artwork_without_marker_is_noop() {
        let url = "https://c.saavncdn.com/a-50x50.jpg";
        assert_eq!(upgrade_artwork(url), url);
    }

    #[test]
    fn test_convert_track() {
        let track = to_track(make_song("3IoDK8qI", "Kesariya"));

        assert_eq!(track.identifier, "3IoDK8qI");
        assert_eq!(track.title, "Kesariya");
        assert_eq!(track.length, 268_000);
        assert_eq!(track.author.as_deref(), Some("Arijit Singh"));
        assert!(track.artwork_url.contains("500x500"));
        assert!(!track.artwork_url.contains("150x150"));
        assert_eq!(
            track.artist_artwork_url.as_deref(),
            Some("https://c.saavncdn.com/artists/Arijit_Singh_500x500.jpg")
        );
        assert_eq!(track.album_name.as_deref(), Some("Brahmastra"));
    }

    #[test]
    fn test_string_duration_becomes_milliseconds() {
        let mut value = song_json("x", "Song");
        value["more_info"]["duration"] = json!("213");

        let track = to_track(serde_json::from_value(value).unwrap());
        assert_eq!(track.length, 213_000);
    }

    #[test]
    fn test_artistless_track_has_null_author_fields() {
        let mut value = song_json("x", "Instrumental");
        value["more_info"]["artistMap"] = json!({ "primary_artists": [] });

        let track = to_track(serde_json::from_value(value).unwrap());
        assert!(track.author.is_none());
        assert!(track.artist_url.is_none());
        assert!(track.artist_artwork_url.is_none());
    }

    #[test]
    fn test_empty_strings_become_none() {
        let mut value = song_json("x", "Song");
        value["perma_url"] = json!("");
        value["more_info"]["album_url"] = json!("");
        value["more_info"]["encrypted_media_url"] = json!("");

        let track = to_track(serde_json::from_value(value).unwrap());
        assert!(track.uri.is_none());
        assert!(track.album_url.is_none());
        assert!(track.encrypted_media_url.is_none());
    }

    #[test]
    fn test_convert_album_keeps_track_order() {
        let album = dto::Album {
            id: "1".to_string(),
            title: "Album".to_string(),
            perma_url: Some("https://www.jiosaavn.com/album/x/1".to_string()),
            image: "https://c.saavncdn.com/a-150x150.jpg".to_string(),
            subtitle: Some("Pritam".to_string()),
            list: vec![make_song("a", "One"), make_song("b", "Two")],
            list_count: Some(2),
        };

        let album = to_album(album);

        assert_eq!(album.name, "Album");
        assert_eq!(album.author.as_deref(), Some("Pritam"));
        assert_eq!(album.artwork_url, "https://c.saavncdn.com/a-500x500.jpg");
        assert_eq!(album.total_songs, Some(2));
        let ids: Vec<_> = album.tracks.iter().map(|t| t.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_convert_artist() {
        let artist = dto::Artist {
            name: "Arijit Singh".to_string(),
            urls: dto::ArtistUrls {
                overview: "https://www.jiosaavn.com/artist/arijit-singh-songs/LlRW".to_string(),
            },
            image: "https://c.saavncdn.com/artists/Arijit_150x150.jpg".to_string(),
            top_songs: vec![make_song("a", "One")],
        };

        let artist = to_artist(artist);

        assert_eq!(artist.uri, "https://www.jiosaavn.com/artist/arijit-singh-songs/LlRW");
        assert_eq!(artist.artwork_url, "https://c.saavncdn.com/artists/Arijit_500x500.jpg");
        assert_eq!(artist.tracks.len(), 1);
    }

    #[test]
    fn test_convert_playlist() {
        let playlist = dto::Playlist {
            title: "Weekly Top Songs".to_string(),
            perma_url: None,
            image: "https://c.saavncdn.com/editorial/top.jpg".to_string(),
            list: vec![make_song("a", "One")],
            list_count: Some(30),
        };

        let playlist = to_playlist(playlist);

        assert_eq!(playlist.title, "Weekly Top Songs");
        assert_eq!(playlist.artwork_url, "https://c.saavncdn.com/editorial/top.jpg");
        assert_eq!(playlist.total_songs, Some(30));
        assert_eq!(playlist.tracks[0].identifier, "a");
    }
}
