//! Episode normalization.
//!
//! Turns one upstream item node into an [`EpisodeRecord`]. Every field is
//! optional except the media URL; a node without one is rejected with
//! [`AudiothekError::MissingMediaUrl`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::lookup::{object_at, str_at, string_at, u64_at};
use super::model::EpisodeRecord;
use crate::error::{AudiothekError, Result};

/// Width substituted into square image templates.
pub const THUMBNAIL_WIDTH: u32 = 320;

const WIDTH_PLACEHOLDER: &str = "{width}";

/// Normalize one item node.
pub fn normalize_episode(node: &Value) -> Result<EpisodeRecord> {
    let id = string_at(node, &["/id"]);

    let url = string_at(node, &["/audios/0/url", "/audios/0/downloadUrl"])
        .ok_or_else(|| AudiothekError::MissingMediaUrl { id: id.clone() })?;

    let (upload_date, timestamp) = str_at(node, &["/publishDate"])
        .map(parse_publish_date)
        .unwrap_or_default();

    Ok(EpisodeRecord {
        title: string_at(node, &["/title"]),
        description: string_at(node, &["/description", "/synopsis"]),
        ext: media_ext(&url),
        url,
        duration: u64_at(node, &["/duration"]),
        upload_date,
        timestamp,
        is_live: false,
        thumbnail: object_at(node, &["/image"])
            .and_then(|image| str_at(image, &["/url1X1"]))
            .map(resolve_thumbnail),
        channel: string_at(node, &["/programSet/publicationService/organizationName"]),
        series: string_at(node, &["/programSet/title"]),
        categories: string_at(node, &["/programSet/publicationService/genre"]),
        id,
    })
}

/// Resolve the width placeholder of an image URL template.
pub fn resolve_thumbnail(template: &str) -> String {
    template.replace(WIDTH_PLACEHOLDER, &THUMBNAIL_WIDTH.to_string())
}

/// Parse a publish timestamp into a calendar date and Unix seconds.
///
/// Offsets are honored for the timestamp while the date is the one written
/// in the string. Naive date-times are taken as UTC. Unparseable input yields
/// `(None, None)`.
pub fn parse_publish_date(raw: &str) -> (Option<NaiveDate>, Option<i64>) {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return (Some(dt.date_naive()), Some(dt.timestamp()));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return (Some(dt.date()), Some(dt.and_utc().timestamp()));
        }
    }

    for fmt in ["%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return (Some(date), None);
        }
    }

    (None, None)
}

/// Lowercased extension of the URL's last path segment, if it looks like one.
fn media_ext(media_url: &str) -> Option<String> {
    let parsed = url::Url::parse(media_url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    (!stem.is_empty() && (1..=5).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .then(|| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_node() -> Value {
        json!({
            "id": "10525879",
            "title": "Philosophie - Meditation und die Auflösung des Ichs",
            "description": "Meditation hilft gegen Stress.",
            "audios": [{
                "url": "https://media.example.de/stream/10525879.mp3",
                "downloadUrl": "https://media.example.de/download/10525879.mp3"
            }],
            "image": {"url1X1": "https://img.example.de/i/abc?w={width}&ch=1"},
            "duration": 600,
            "publishDate": "2022-05-21T07:40:00Z",
            "programSet": {
                "title": "Die Profis",
                "publicationService": {"organizationName": "rbb", "genre": "Wissen"}
            }
        })
    }

    #[test]
    fn normalizes_full_node() {
        let ep = normalize_episode(&full_node()).unwrap();
        assert_eq!(ep.id.as_deref(), Some("10525879"));
        assert_eq!(ep.url, "https://media.example.de/stream/10525879.mp3");
        assert_eq!(ep.ext.as_deref(), Some("mp3"));
        assert_eq!(ep.duration, Some(600));
        assert_eq!(ep.upload_date, NaiveDate::from_ymd_opt(2022, 5, 21));
        assert_eq!(ep.timestamp, Some(1_653_118_800));
        assert!(!ep.is_live);
        assert_eq!(
            ep.thumbnail.as_deref(),
            Some("https://img.example.de/i/abc?w=320&ch=1")
        );
        assert_eq!(ep.channel.as_deref(), Some("rbb"));
        assert_eq!(ep.series.as_deref(), Some("Die Profis"));
        assert_eq!(ep.categories.as_deref(), Some("Wissen"));
        assert_eq!(ep.description.as_deref(), Some("Meditation hilft gegen Stress."));
    }

    #[test]
    fn streaming_url_wins_over_download_url() {
        let ep = normalize_episode(&full_node()).unwrap();
        assert!(ep.url.contains("/stream/"));
    }

    #[test]
    fn falls_back_to_download_url() {
        let node = json!({"id": "1", "audios": [{"url": null, "downloadUrl": "https://dl/x.MP3"}]});
        let ep = normalize_episode(&node).unwrap();
        assert_eq!(ep.url, "https://dl/x.MP3");
        assert_eq!(ep.ext.as_deref(), Some("mp3"));
    }

    #[test]
    fn missing_urls_fail() {
        for node in [
            json!({"id": "7"}),
            json!({"id": "7", "audios": []}),
            json!({"id": "7", "audios": [{}]}),
            json!({"id": "7", "audios": [{"url": "", "downloadUrl": null}]}),
        ] {
            match normalize_episode(&node) {
                Err(AudiothekError::MissingMediaUrl { id }) => assert_eq!(id.as_deref(), Some("7")),
                other => panic!("expected MissingMediaUrl, got {other:?}"),
            }
        }
    }

    #[test]
    fn only_first_audio_variant_is_considered() {
        let node = json!({"audios": [{}, {"url": "https://a/2.mp3"}]});
        assert!(normalize_episode(&node).is_err());
    }

    #[test]
    fn optional_fields_degrade_to_none() {
        let node = json!({
            "audios": [{"url": "https://a/1"}],
            "duration": "n/a",
            "publishDate": "sometime",
            "programSet": {"publicationService": null}
        });
        let ep = normalize_episode(&node).unwrap();
        assert_eq!(ep.id, None);
        assert_eq!(ep.title, None);
        assert_eq!(ep.duration, None);
        assert_eq!(ep.upload_date, None);
        assert_eq!(ep.timestamp, None);
        assert_eq!(ep.thumbnail, None);
        assert_eq!(ep.channel, None);
        assert_eq!(ep.series, None);
        assert_eq!(ep.categories, None);
        assert_eq!(ep.ext, None);
        assert!(!ep.is_live);
    }

    #[test]
    fn thumbnail_width_is_always_resolved() {
        assert_eq!(resolve_thumbnail("https://i/{width}/x.jpg"), "https://i/320/x.jpg");
        assert!(!resolve_thumbnail("https://i/{width}?w={width}").contains("{width}"));
    }

    #[test]
    fn publish_date_formats() {
        let (d, ts) = parse_publish_date("2022-05-21T09:40:00+02:00");
        assert_eq!(d, NaiveDate::from_ymd_opt(2022, 5, 21));
        assert_eq!(ts, Some(1_653_118_800));

        let (d, ts) = parse_publish_date("2022-05-21T07:40:00.000");
        assert_eq!(d, NaiveDate::from_ymd_opt(2022, 5, 21));
        assert_eq!(ts, Some(1_653_118_800));

        assert_eq!(parse_publish_date("2022-05-21").0, NaiveDate::from_ymd_opt(2022, 5, 21));
        assert_eq!(parse_publish_date("21.05.2022").0, NaiveDate::from_ymd_opt(2022, 5, 21));
        assert_eq!(parse_publish_date("yesterday"), (None, None));
    }
}
