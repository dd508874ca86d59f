//! URL classification for the four Audiothek web routes.
//!
//! - `/episode/<slug>/<slug>/<slug>/<id>`: a single episode (upstream `item`)
//! - `/sendung/<slug>/<id>`: a show (upstream `programSet`)
//! - `/sammlung/<slug>/<id>`: a curated collection (upstream `editorialCollection`)
//! - `/suche/<term>`: a search over episodes (upstream `search`)

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::query::PlaylistKind;

static EPISODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/episode/[^/]+/[^/]+/[^/]+/(?P<id>[0-9]+)(?:/.*)?$").expect("valid regex")
});
static SHOW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/sendung/[^/]+/(?P<id>[0-9]+)(?:/.*)?$").expect("valid regex"));
static COLLECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/sammlung/[^/]+/(?P<id>[0-9]+)(?:/.*)?$").expect("valid regex"));
static SEARCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/suche/(?P<id>[^/]+)(?:/.*)?$").expect("valid regex"));

/// A recognized URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Episode,
    Show,
    Collection,
    Search,
}

/// A classified URL: which route, and the id or search term it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub arg: String,
}

impl Route {
    pub const ALL: [Route; 4] = [Self::Episode, Self::Show, Self::Collection, Self::Search];

    pub fn name(self) -> &'static str {
        match self {
            Self::Episode => "episode",
            Self::Show => "sendung",
            Self::Collection => "sammlung",
            Self::Search => "suche",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Episode => &*EPISODE_RE,
            Self::Show => &*SHOW_RE,
            Self::Collection => &*COLLECTION_RE,
            Self::Search => &*SEARCH_RE,
        }
    }

    /// The playlist kind this route maps to, `None` for single episodes.
    pub fn playlist_kind(self) -> Option<PlaylistKind> {
        match self {
            Self::Episode => None,
            Self::Show => Some(PlaylistKind::ProgramSet),
            Self::Collection => Some(PlaylistKind::EditorialCollection),
            Self::Search => Some(PlaylistKind::Search),
        }
    }

    /// Extract the id (or decoded search term) from a URL path.
    ///
    /// The host is not checked here; see [`classify`].
    pub fn extract(self, path: &str) -> Option<String> {
        let raw = self.pattern().captures(path)?.name("id")?.as_str();
        match self {
            Self::Search => urlencoding::decode(raw)
                .ok()
                .map(|term| term.into_owned())
                .filter(|term| !term.trim().is_empty()),
            _ => Some(raw.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `url` if it is an http(s) URL on `site_host` (optionally
/// prefixed with `www.`) matching one of the routes.
pub fn classify(url: &str, site_host: &str) -> Option<RouteMatch> {
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let host = parsed.host_str()?.to_ascii_lowercase();
    let site_host = site_host.to_ascii_lowercase();
    if host != site_host && host.strip_prefix("www.") != Some(site_host.as_str()) {
        return None;
    }

    Route::ALL.into_iter().find_map(|route| {
        route
            .extract(parsed.path())
            .map(|arg| RouteMatch { route, arg })
    })
}
