//! Playlist assembly shared by the show, collection and search routes.

use serde_json::Value;
use tracing::{debug, warn};

use super::lookup::{array_at, string_at, u64_at};
use super::model::{EpisodeRecord, PlaylistResult};
use super::normalize::normalize_episode;
use super::query::{build_query, PlaylistKind};
use crate::error::{AudiothekError, Result};
use crate::graphql::GraphqlTransport;

/// Receives non-fatal warnings about dropped entries, keyed by entry id.
pub trait WarningSink: Send + Sync {
    fn report(&self, id: Option<&str>, message: &str);
}

/// Sink that forwards warnings to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn report(&self, id: Option<&str>, message: &str) {
        warn!(entry = id.unwrap_or("<unknown>"), "{message}");
    }
}

/// An entry dropped during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    pub id: Option<String>,
    pub message: String,
}

/// Outcome of normalizing a node list.
#[derive(Debug, Default)]
pub struct Assembled {
    pub entries: Vec<EpisodeRecord>,
    pub dropped: Vec<DroppedEntry>,
}

/// Normalize every node in order, keeping failures as dropped entries.
pub fn assemble(nodes: &[Value]) -> Assembled {
    nodes.iter().fold(Assembled::default(), |mut acc, node| {
        match normalize_episode(node) {
            Ok(entry) => acc.entries.push(entry),
            Err(err) => {
                let id = string_at(node, &["/id"]);
                let message = format!("{err}; might be a duplicate or garbage entry");
                acc.dropped.push(DroppedEntry { id, message });
            }
        }
        acc
    })
}

/// Build a playlist from a decoded response.
///
/// `arg` is the requested id, or the search term, which doubles as the
/// playlist title for searches.
pub fn playlist_from_response(
    kind: PlaylistKind,
    arg: &str,
    response: &Value,
    sink: &dyn WarningSink,
) -> Result<PlaylistResult> {
    let nodes_path = kind.nodes_path();
    let nodes = array_at(response, &[nodes_path.as_str()])
        .filter(|nodes| !nodes.is_empty())
        .ok_or(AudiothekError::EmptyPlaylist {
            what: if kind.is_search() { "search results" } else { "playlist data" },
        })?;

    let (id, title) = if kind.is_search() {
        (None, Some(arg.to_string()))
    } else {
        let root = format!("/data/{}", kind.root_field());
        (
            string_at(response, &[format!("{root}/id").as_str()]),
            string_at(response, &[format!("{root}/title").as_str()]),
        )
    };

    let Assembled { entries, dropped } = assemble(nodes);
    for entry in &dropped {
        sink.report(entry.id.as_deref(), &entry.message);
    }

    if entries.is_empty() {
        warn!(kind = kind.root_field(), "every entry of {arg} was dropped");
    } else if !dropped.is_empty() {
        debug!("kept {} of {} entries", entries.len(), nodes.len());
    }

    Ok(PlaylistResult {
        id,
        title,
        reported_count: u64_at(response, &[kind.count_path().as_str()]),
        entries,
    })
}

/// Query the upstream for `kind` and assemble the result.
pub async fn fetch_playlist(
    transport: &dyn GraphqlTransport,
    kind: PlaylistKind,
    arg: &str,
    sink: &dyn WarningSink,
) -> Result<PlaylistResult> {
    let response = transport.execute(&build_query(kind.into(), arg)).await?;
    playlist_from_response(kind, arg, &response, sink)
}
