//! Share-link commands.

use serde::Serialize;
use tokio::runtime::Runtime;
use tracing::info;

use crate::catalog::{CatalogClient, EntityKind, extract};
use crate::config::Config;
use crate::error::{Error, Result, ResultExt};

use super::lookup::{show_album, show_artist, show_playlist, show_track};
use super::print_json;

#[derive(Debug, Serialize)]
struct Extracted<'a> {
    kind: EntityKind,
    token: &'a str,
}

/// Match `url` against one kind, or detect the kind
fn match_link(url: &str, kind: Option<EntityKind>) -> Result<(EntityKind, &str)> {
    let found = match kind {
        Some(kind) => extract::extract(kind, url).map(|token| (kind, token)),
        None => extract::detect(url),
    };

    found.ok_or_else(|| match kind {
        Some(kind) => Error::invalid_input(format!("not a {kind} link: {url}")),
        None => Error::invalid_input(format!("not a recognized share link: {url}")),
    })
}

/// Print the token embedded in a share link
pub fn cmd_extract(url: &str, kind: Option<EntityKind>, json: bool) -> Result<()> {
    let (kind, token) = match_link(url, kind)?;

    if json {
        return print_json(&Extracted { kind, token });
    }
    println!("{}: {}", kind, token);
    Ok(())
}

/// Extract a share link's token and fetch the entity it points at
pub fn cmd_resolve(
    rt: &Runtime,
    client: &CatalogClient,
    config: &Config,
    url: &str,
    json: bool,
) -> Result<()> {
    let (kind, token) = match_link(url, None)?;
    info!(%kind, token, "Resolving share link");

    let context = format!("Resolving {url}");
    match kind {
        EntityKind::Track => {
            let result = rt.block_on(client.get_track(token)).with_context(context)?;
            show_track(&result, json)
        }
        EntityKind::Album => {
            let result = rt.block_on(client.get_album(token)).with_context(context)?;
            show_album(&result, json)
        }
        EntityKind::Artist => {
            let result = rt.block_on(client.get_artist(token)).with_context(context)?;
            show_artist(&result, json)
        }
        EntityKind::Playlist => {
            let limit = Some(config.catalog.playlist_limit);
            let result = rt
                .block_on(client.get_playlist(token, limit))
                .with_context(context)?;
            show_playlist(&result, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_link_detects_kind() {
        let (kind, token) =
            match_link("https://www.jiosaavn.com/song/kesariya/OgwhbhtDRwM", None).unwrap();
        assert_eq!(kind, EntityKind::Track);
        assert_eq!(token, "OgwhbhtDRwM");
    }

    #[test]
    fn test_match_link_with_wrong_kind() {
        let err = match_link(
            "https://www.jiosaavn.com/song/kesariya/OgwhbhtDRwM",
            Some(EntityKind::Playlist),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a playlist link"));
    }

    #[test]
    fn test_match_link_rejects_foreign_url() {
        assert!(match_link("https://example.com/anything", None).is_err());
    }

    #[test]
    fn test_extracted_serializes_kind_as_string() {
        let value = serde_json::to_value(Extracted {
            kind: EntityKind::Album,
            token: "xe6Gx2yYlGE_",
        })
        .unwrap();
        assert_eq!(value["kind"], "album");
        assert_eq!(value["token"], "xe6Gx2yYlGE_");
    }
}
