//! GraphQL query construction for the Audiothek API.

use std::fmt;
use std::str::FromStr;

/// Fields requested for every episode node.
const EPISODE_FIELDS: &str = "id,title,audios{url,downloadUrl},image{url1X1},duration,publishDate,\
description:synopsis,programSet{title,publicationService{organizationName,genre}}";

/// Upstream root fields a query can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKind {
    Item,
    ProgramSet,
    EditorialCollection,
    Search,
}

/// The subset of [`ApiKind`] that yields a list of episode nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistKind {
    ProgramSet,
    EditorialCollection,
    Search,
}

impl ApiKind {
    /// Root field name under `data` in the response.
    pub fn root_field(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::ProgramSet => "programSet",
            Self::EditorialCollection => "editorialCollection",
            Self::Search => "search",
        }
    }
}

impl PlaylistKind {
    pub fn root_field(self) -> &'static str {
        ApiKind::from(self).root_field()
    }

    /// JSON pointer to the node list in a response.
    pub fn nodes_path(self) -> String {
        format!("/data/{}/items/nodes", self.root_field())
    }

    /// JSON pointer to the element count the upstream reports.
    pub fn count_path(self) -> String {
        match self {
            Self::Search => "/data/search/items/totalCount".to_string(),
            _ => format!("/data/{}/numberOfElements", self.root_field()),
        }
    }

    pub fn is_search(self) -> bool {
        self == Self::Search
    }
}

impl From<PlaylistKind> for ApiKind {
    fn from(kind: PlaylistKind) -> Self {
        match kind {
            PlaylistKind::ProgramSet => Self::ProgramSet,
            PlaylistKind::EditorialCollection => Self::EditorialCollection,
            PlaylistKind::Search => Self::Search,
        }
    }
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_field())
    }
}

impl FromStr for ApiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" | "episode" => Ok(Self::Item),
            "programSet" | "sendung" | "show" => Ok(Self::ProgramSet),
            "editorialCollection" | "sammlung" | "collection" => Ok(Self::EditorialCollection),
            "search" | "suche" => Ok(Self::Search),
            other => Err(format!(
                "unknown kind '{other}' (expected item, programSet, editorialCollection or search)"
            )),
        }
    }
}

/// Build the query document for `kind`.
///
/// `arg` is the id, or the free-text term for [`ApiKind::Search`]. It is
/// embedded as a GraphQL string literal with quotes and control characters
/// escaped.
pub fn build_query(kind: ApiKind, arg: &str) -> String {
    let arg = string_literal(arg);
    match kind {
        ApiKind::Item => format!("query{{item(id:{arg}){{{EPISODE_FIELDS}}}}}"),
        ApiKind::ProgramSet | ApiKind::EditorialCollection => format!(
            "{{{root}(id:{arg}){{id,title,numberOfElements,items{{nodes{{{EPISODE_FIELDS}}}}}}}}}",
            root = kind.root_field()
        ),
        ApiKind::Search => format!(
            "{{search(query:{arg}){{items{{totalCount nodes{{{EPISODE_FIELDS}}}}}}}}}"
        ),
    }
}

/// GraphQL string literals share JSON's escaping rules.
fn string_literal(raw: &str) -> String {
    serde_json::Value::from(raw).to_string()
}
