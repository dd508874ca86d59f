use anyhow::{Context, Result};

use audiothek::{Audiothek, AudiothekError, Config};

use super::output::print_extraction;
use crate::OutputFormat;

pub async fn cmd_resolve(config: &Config, url: &str, format: OutputFormat) -> Result<()> {
    let audiothek = Audiothek::new(config).context("failed to build HTTP client")?;

    if !audiothek.matches(url) {
        return Err(AudiothekError::UnsupportedUrl(url.to_string()).into());
    }

    tracing::debug!("querying {}", config.api_url);
    let extraction = audiothek.resolve(url).await?;
    print_extraction(&extraction, format)
}
