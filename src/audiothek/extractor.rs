//! Route resolvers.
//!
//! [`Audiothek`] resolves a classified URL with exactly one upstream query:
//! the episode route normalizes a single item, the other three share the
//! playlist assembler.

use serde_json::Value;
use tracing::debug;

use super::lookup::object_at;
use super::model::{EpisodeRecord, Extraction, PlaylistResult};
use super::normalize::normalize_episode;
use super::playlist::{fetch_playlist, TracingSink, WarningSink};
use super::query::{build_query, ApiKind, PlaylistKind};
use super::route::{classify, Route, RouteMatch};
use crate::config::Config;
use crate::error::{AudiothekError, Result};
use crate::graphql::{GraphqlTransport, HttpTransport};

/// Resolver for Audiothek URLs.
pub struct Audiothek {
    transport: Box<dyn GraphqlTransport>,
    sink: Box<dyn WarningSink>,
    site_host: String,
}

impl Audiothek {
    /// Resolver backed by HTTP, reporting warnings through `tracing`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(
            Box::new(HttpTransport::new(config)?),
            &config.site_host,
        ))
    }

    pub fn with_transport(transport: Box<dyn GraphqlTransport>, site_host: &str) -> Self {
        Self {
            transport,
            sink: Box::new(TracingSink),
            site_host: site_host.to_string(),
        }
    }

    /// Replace the sink receiving dropped-entry warnings.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns `true` if `url` is one of the supported routes.
    pub fn matches(&self, url: &str) -> bool {
        classify(url, &self.site_host).is_some()
    }

    /// Classify and resolve `url`.
    pub async fn resolve(&self, url: &str) -> Result<Extraction> {
        let m = classify(url, &self.site_host)
            .ok_or_else(|| AudiothekError::UnsupportedUrl(url.to_string()))?;
        debug!(route = %m.route, arg = %m.arg, "resolving");
        self.resolve_match(&m).await
    }

    pub async fn resolve_match(&self, m: &RouteMatch) -> Result<Extraction> {
        match m.route.playlist_kind() {
            None => self.episode(&m.arg).await.map(Extraction::Episode),
            Some(kind) => self.playlist(kind, &m.arg).await.map(Extraction::Playlist),
        }
    }

    /// Resolve a single episode by id.
    ///
    /// A missing media URL is fatal here, unlike inside playlists.
    pub async fn episode(&self, id: &str) -> Result<EpisodeRecord> {
        let response = self.transport.execute(&build_query(ApiKind::Item, id)).await?;
        episode_from_response(id, &response)
    }

    /// Resolve a show, collection or search.
    pub async fn playlist(&self, kind: PlaylistKind, arg: &str) -> Result<PlaylistResult> {
        fetch_playlist(self.transport.as_ref(), kind, arg, self.sink.as_ref()).await
    }

    pub fn site_host(&self) -> &str {
        &self.site_host
    }
}

fn episode_from_response(id: &str, response: &Value) -> Result<EpisodeRecord> {
    let item = object_at(response, &["/data/item"])
        .ok_or_else(|| AudiothekError::NoEpisodeData { id: id.to_string() })?;
    normalize_episode(item)
}

/// Route an id straight to a resolver without a URL.
pub async fn resolve_id(audiothek: &Audiothek, route: Route, arg: &str) -> Result<Extraction> {
    let m = RouteMatch {
        route,
        arg: arg.to_string(),
    };
    audiothek.resolve_match(&m).await
}
