//! `audiothek` - Resolve ARD Audiothek URLs into download descriptors
//!
//! # Features
//!
//! - **Episodes**: one item query, normalized into an [`EpisodeRecord`] with a
//!   direct media URL
//! - **Playlists**: shows, curated collections and searches assembled from a
//!   single query, dropping incomplete entries with a warning
//! - **Transport**: GraphQL over HTTP behind [`GraphqlTransport`]
//!
//! # Example
//!
//! ```rust,no_run
//! use audiothek::{Audiothek, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let audiothek = Audiothek::new(&Config::load()?)?;
//!     let ep = audiothek.episode("10525879").await?;
//!     println!("{}", ep.url);
//!     Ok(())
//! }
//! ```

pub mod audiothek;
pub mod config;
pub mod error;
pub mod graphql;

pub use audiothek::{
    build_query, classify, normalize_episode, ApiKind, Audiothek, EpisodeRecord, Extraction,
    PlaylistKind, PlaylistResult, Route, RouteMatch, TracingSink, WarningSink,
};
pub use config::Config;
pub use error::{AudiothekError, Result};
pub use graphql::{GraphqlTransport, HttpTransport};

/// Version of audiothek
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
