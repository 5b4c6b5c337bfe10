//! Command-line interface for saavn-catalog.
//!
//! Thin wrapper over [`crate::catalog`] for poking at the upstream API by
//! hand: every lookup the client offers, plus share-link extraction.

mod commands;

pub use commands::{Cli, Commands, run_command};
