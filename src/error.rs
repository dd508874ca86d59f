//! Error taxonomy for Audiothek resolution.
//!
//! The first three variants are legitimate upstream states (deleted content,
//! a search with no hits, an incomplete record). They are reported to users as
//! terse one-line messages; [`AudiothekError::is_expected`] tells them apart
//! from transport failures.

use thiserror::Error;

/// Resolution errors
#[derive(Error, Debug)]
pub enum AudiothekError {
    /// A node carried neither a streaming nor a download URL.
    #[error("could not find a URL to download{}", entry_suffix(.id))]
    MissingMediaUrl { id: Option<String> },

    /// A playlist or search query returned no node list.
    #[error("could not find any {what}")]
    EmptyPlaylist { what: &'static str },

    /// An item query returned no item for the id.
    #[error("could not find any episode data for {id}")]
    NoEpisodeData { id: String },

    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("Audiothek API error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Audiothek API returned errors: {0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AudiothekError {
    /// Returns `true` for failures caused by upstream content state rather
    /// than by a bug or a broken connection.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingMediaUrl { .. }
                | Self::EmptyPlaylist { .. }
                | Self::NoEpisodeData { .. }
                | Self::UnsupportedUrl(_)
        )
    }
}

fn entry_suffix(id: &Option<String>) -> String {
    id.as_deref()
        .map(|id| format!(" for entry {id}"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, AudiothekError>;
