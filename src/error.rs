//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CatalogError`], [`ConfigError`]); this enum aggregates them for the
//! command layer, and `main` uses `anyhow` on top.
//!
//! # Example
//!
//! ```ignore
//! use saavn_catalog::error::{Result, ResultExt};
//!
//! async fn show(client: &CatalogClient, token: &str) -> Result<()> {
//!     let album = client.get_album(token).await.with_context("fetching album")?;
//!     Ok(())
//! }
//! ```

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Upstream catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serializing output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The catalog error at the root of this error, if any
    pub fn catalog(&self) -> Option<&CatalogError> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::WithContext { source, .. } => source.catalog(),
            _ => None,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, CatalogError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Catalog(e).context(ctx))
    }
}
