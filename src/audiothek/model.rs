//! Normalized output records.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// One episode, normalized from an upstream item node.
///
/// A record is only ever built with a non-empty `url`; nodes without one are
/// rejected by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Direct media URL (streaming URL preferred over download URL).
    pub url: String,
    /// File extension of the media URL path, lowercased.
    pub ext: Option<String>,
    /// Duration in seconds.
    pub duration: Option<u64>,
    #[serde(serialize_with = "compact_date")]
    pub upload_date: Option<NaiveDate>,
    /// Publish time as Unix seconds.
    pub timestamp: Option<i64>,
    /// Always `false`; the platform has no live streams.
    pub is_live: bool,
    pub thumbnail: Option<String>,
    /// Display name of the owning organization.
    pub channel: Option<String>,
    /// Title of the parent show.
    pub series: Option<String>,
    /// Genre tag of the publication service.
    pub categories: Option<String>,
}

/// An ordered collection of episodes from a show, collection or search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistResult {
    /// Upstream id; `None` for search results.
    pub id: Option<String>,
    pub title: Option<String>,
    /// Element count as reported by the upstream, before filtering.
    pub reported_count: Option<u64>,
    /// Surviving entries in upstream order.
    pub entries: Vec<EpisodeRecord>,
}

/// What a route resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_type", rename_all = "snake_case")]
pub enum Extraction {
    Episode(EpisodeRecord),
    Playlist(PlaylistResult),
}

impl Extraction {
    /// Media URLs in output order.
    pub fn media_urls(&self) -> Vec<&str> {
        match self {
            Self::Episode(ep) => vec![ep.url.as_str()],
            Self::Playlist(pl) => pl.entries.iter().map(|ep| ep.url.as_str()).collect(),
        }
    }
}

/// Dates serialize as `YYYYMMDD`.
#[allow(clippy::ref_option)]
fn compact_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => s.serialize_str(&d.format("%Y%m%d").to_string()),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> EpisodeRecord {
        EpisodeRecord {
            id: Some("1".into()),
            title: Some("T".into()),
            description: None,
            url: url.into(),
            ext: None,
            duration: None,
            upload_date: NaiveDate::from_ymd_opt(2022, 5, 21),
            timestamp: None,
            is_live: false,
            thumbnail: None,
            channel: None,
            series: None,
            categories: None,
        }
    }

    #[test]
    fn episode_serializes_with_type_tag_and_compact_date() {
        let json = serde_json::to_value(Extraction::Episode(record("https://a/1.mp3"))).unwrap();
        assert_eq!(json["_type"], "episode");
        assert_eq!(json["upload_date"], "20220521");
        assert_eq!(json["is_live"], false);
    }

    #[test]
    fn playlist_serializes_entries_in_order() {
        let pl = PlaylistResult {
            id: None,
            title: Some("termite".into()),
            reported_count: Some(2),
            entries: vec![record("https://a/1.mp3"), record("https://a/2.mp3")],
        };
        let extraction = Extraction::Playlist(pl);
        assert_eq!(extraction.media_urls(), vec!["https://a/1.mp3", "https://a/2.mp3"]);

        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["_type"], "playlist");
        assert!(json["id"].is_null());
        assert_eq!(json["entries"][1]["url"], "https://a/2.mp3");
    }
}
