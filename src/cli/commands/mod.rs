//! CLI command definitions and dispatch.
//!
//! Each subcommand group lives in its own submodule:
//! - `lookup`: search and the per-entity catalog lookups
//! - `links`: share-link extraction and resolution
//! - `settings`: config file inspection and initialization

mod links;
mod lookup;
mod settings;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::catalog::{CatalogClient, EntityKind, Track};
use crate::config::Config;
use crate::error::Result;

pub use links::{cmd_extract, cmd_resolve};
pub use lookup::{
    cmd_album, cmd_artist, cmd_playlist, cmd_recommend, cmd_search, cmd_track, cmd_track_by_id,
};
pub use settings::cmd_config;

/// JioSaavn catalog CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "SAAVN_CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search songs
    Search {
        /// Free-text query
        query: String,
    },
    /// Look up a song by the token from its share link
    Track {
        token: String,
    },
    /// Look up a song by its catalog id
    TrackById {
        id: String,
    },
    /// Look up an album by token
    Album {
        token: String,
    },
    /// Look up an artist and their top songs by token
    Artist {
        token: String,
    },
    /// Look up a playlist by token
    Playlist {
        token: String,
        /// Number of songs to fetch (default from config, 100)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Songs related to a song id
    Recommend {
        /// Song id to seed the station with
        id: String,
        /// Number of songs to fetch (default from config, 10)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Extract the token from a share link (offline)
    Extract {
        url: String,
        /// Entity kind to match (track, album, artist, playlist); detected if omitted
        #[arg(short, long)]
        kind: Option<EntityKind>,
    },
    /// Extract the token from a share link and fetch the entity
    Resolve {
        url: String,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let json = cli.json;

    match &cli.command {
        Commands::Search { query } => {
            let (rt, client) = connect(config)?;
            cmd_search(&rt, &client, query, json)?;
        }
        Commands::Track { token } => {
            let (rt, client) = connect(config)?;
            cmd_track(&rt, &client, token, json)?;
        }
        Commands::TrackById { id } => {
            let (rt, client) = connect(config)?;
            cmd_track_by_id(&rt, &client, id, json)?;
        }
        Commands::Album { token } => {
            let (rt, client) = connect(config)?;
            cmd_album(&rt, &client, token, json)?;
        }
        Commands::Artist { token } => {
            let (rt, client) = connect(config)?;
            cmd_artist(&rt, &client, token, json)?;
        }
        Commands::Playlist { token, limit } => {
            let (rt, client) = connect(config)?;
            let limit = limit.unwrap_or(config.catalog.playlist_limit);
            cmd_playlist(&rt, &client, token, limit, json)?;
        }
        Commands::Recommend { id, limit } => {
            let (rt, client) = connect(config)?;
            let limit = limit.unwrap_or(config.catalog.recommendation_limit);
            cmd_recommend(&rt, &client, id, limit, json)?;
        }
        Commands::Resolve { url } => {
            let (rt, client) = connect(config)?;
            cmd_resolve(&rt, &client, config, url, json)?;
        }
        Commands::Extract { url, kind } => cmd_extract(url, *kind, json)?,
        Commands::Config { init } => cmd_config(config, cli.config.as_deref(), *init, json)?,
    }

    Ok(())
}

/// Runtime and client for the commands that hit the network
fn connect(config: &Config) -> anyhow::Result<(Runtime, CatalogClient)> {
    let rt = Runtime::new()?;
    let client = CatalogClient::from_config(&config.catalog)?;
    Ok((rt, client))
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print `value` as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a numbered track listing
pub(crate) fn print_tracks(tracks: &[Track]) {
    for (i, track) in tracks.iter().enumerate() {
        println!(
            "{:>3}. {} - {} [{}]  ({})",
            i + 1,
            track.author.as_deref().unwrap_or("Unknown Artist"),
            track.title,
            format_length(track.length),
            track.identifier
        );
    }
}

/// Print one track with all its links
pub(crate) fn print_track(track: &Track) {
    println!("  Title:   {}", track.title);
    if let Some(author) = &track.author {
        println!("  Artist:  {}", author);
    }
    if let Some(album) = &track.album_name {
        println!("  Album:   {}", album);
    }
    println!("  Length:  {}", format_length(track.length));
    println!("  Id:      {}", track.identifier);
    if let Some(uri) = &track.uri {
        println!("  Link:    {}", uri);
    }
    println!("  Artwork: {}", track.artwork_url);
}

/// Milliseconds as m:ss
pub(crate) fn format_length(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
