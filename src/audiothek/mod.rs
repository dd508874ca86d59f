//! ARD Audiothek support.
//!
//! Maps the four public URL shapes (episode, show, collection, search) onto
//! the Audiothek GraphQL API and normalizes its item nodes into
//! [`EpisodeRecord`]s.
//!
//! # Example
//!
//! ```rust,no_run
//! use audiothek::{Audiothek, Config, Extraction};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let audiothek = Audiothek::new(&Config::default())?;
//! match audiothek
//!     .resolve("https://www.ardaudiothek.de/sendung/korridore-mystery-horror-serie/12187357/")
//!     .await?
//! {
//!     Extraction::Episode(ep) => println!("{}", ep.url),
//!     Extraction::Playlist(pl) => println!("{} entries", pl.entries.len()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod extractor;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod playlist;
pub mod query;
pub mod route;

pub use extractor::{resolve_id, Audiothek};
pub use model::{EpisodeRecord, Extraction, PlaylistResult};
pub use normalize::normalize_episode;
pub use playlist::{TracingSink, WarningSink};
pub use query::{build_query, ApiKind, PlaylistKind};
pub use route::{classify, Route, RouteMatch};
