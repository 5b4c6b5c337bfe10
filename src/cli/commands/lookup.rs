//! Catalog lookup commands: search, tracks, albums, artists, playlists and
//! recommendations.

use tokio::runtime::Runtime;
use tracing::debug;

use crate::catalog::{
    AlbumResult, ArtistResult, CatalogClient, PlaylistResult, Recommendations, SearchResults,
    TrackResult,
};
use crate::error::{Result, ResultExt};

use super::{print_json, print_track, print_tracks};

/// Search songs and print the ranked results
pub fn cmd_search(rt: &Runtime, client: &CatalogClient, query: &str, json: bool) -> Result<()> {
    debug!(query, "Searching catalog");
    let found = rt.block_on(client.search(query))?;

    if json {
        return print_json(&found);
    }
    show_search(query, &found);
    Ok(())
}

/// Look up a song by share-link token
pub fn cmd_track(rt: &Runtime, client: &CatalogClient, token: &str, json: bool) -> Result<()> {
    let result = rt
        .block_on(client.get_track(token))
        .with_context(format!("Looking up track {token}"))?;
    show_track(&result, json)
}

/// Look up a song by catalog id
pub fn cmd_track_by_id(rt: &Runtime, client: &CatalogClient, id: &str, json: bool) -> Result<()> {
    let result = rt
        .block_on(client.get_track_by_id(id))
        .with_context(format!("Looking up track {id}"))?;
    show_track(&result, json)
}

pub fn cmd_album(rt: &Runtime, client: &CatalogClient, token: &str, json: bool) -> Result<()> {
    let result = rt
        .block_on(client.get_album(token))
        .with_context(format!("Looking up album {token}"))?;
    show_album(&result, json)
}

pub fn cmd_artist(rt: &Runtime, client: &CatalogClient, token: &str, json: bool) -> Result<()> {
    let result = rt
        .block_on(client.get_artist(token))
        .with_context(format!("Looking up artist {token}"))?;
    show_artist(&result, json)
}

pub fn cmd_playlist(
    rt: &Runtime,
    client: &CatalogClient,
    token: &str,
    limit: u32,
    json: bool,
) -> Result<()> {
    let result = rt
        .block_on(client.get_playlist(token, Some(limit)))
        .with_context(format!("Looking up playlist {token}"))?;
    show_playlist(&result, json)
}

/// Print songs related to a song id
pub fn cmd_recommend(
    rt: &Runtime,
    client: &CatalogClient,
    id: &str,
    limit: u32,
    json: bool,
) -> Result<()> {
    let result = rt
        .block_on(client.get_recommendations(id, Some(limit)))
        .with_context(format!("Fetching recommendations for {id}"))?;

    if json {
        return print_json(&result);
    }
    show_recommendations(&result);
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn show_search(query: &str, found: &SearchResults) {
    println!("Results for \"{}\":", query);
    println!();
    print_tracks(&found.results);
}

pub(super) fn show_track(result: &TrackResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    print_track(&result.track);
    Ok(())
}

pub(super) fn show_album(result: &AlbumResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    let album = &result.album;
    println!("{}", album.name);
    if let Some(author) = &album.author {
        println!("  by {}", author);
    }
    if let Some(total) = album.total_songs {
        println!("  {} songs", total);
    }
    println!();
    print_tracks(&album.tracks);
    Ok(())
}

pub(super) fn show_artist(result: &ArtistResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    let artist = &result.artist;
    println!("{}", artist.name);
    println!("  {}", artist.uri);
    println!();
    println!("Top songs:");
    print_tracks(&artist.tracks);
    Ok(())
}

pub(super) fn show_playlist(result: &PlaylistResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }
    let playlist = &result.playlist;
    match playlist.total_songs {
        Some(total) => println!(
            "{} ({} of {} songs)",
            playlist.title,
            playlist.tracks.len(),
            total
        ),
        None => println!("{} ({} songs)", playlist.title, playlist.tracks.len()),
    }
    println!();
    print_tracks(&playlist.tracks);
    Ok(())
}

fn show_recommendations(result: &Recommendations) {
    if result.tracks.is_empty() {
        println!("No recommendations returned for this station.");
        return;
    }
    println!("Recommended:");
    print_tracks(&result.tracks);
}
