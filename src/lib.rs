//! saavn-catalog - a client adapter for the JioSaavn catalog web API.
//!
//! Fetches songs, albums, artists, playlists and recommendations and
//! reshapes the upstream JSON into a stable schema. See [`catalog`] for the
//! client itself; the `saavn-catalog` binary wraps it in a CLI.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod test_utils;
