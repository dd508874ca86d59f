//! `audiothek` CLI - resolve ARD Audiothek URLs from the command line

mod cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use audiothek::{ApiKind, AudiothekError, Config};

#[derive(Parser)]
#[command(name = "audiothek")]
#[command(about = "Resolve ARD Audiothek episode, show, collection and search URLs")]
#[command(version)]
struct Cli {
    /// GraphQL endpoint (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file (default: ~/.config/audiothek/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL into an episode or playlist
    Resolve {
        /// Episode, show (/sendung), collection (/sammlung) or search (/suche) URL
        url: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the GraphQL query for a kind and id without sending it
    Query {
        /// item, programSet, editorialCollection or search
        kind: ApiKind,

        /// Id, or the search term for `search`
        arg: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full record as JSON
    Json,
    /// Media URLs only, one per line
    Urls,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Upstream content states get a one-line message, everything else the full chain.
            match e.downcast_ref::<AudiothekError>() {
                Some(err) if err.is_expected() => eprintln!("error: {err}"),
                _ => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve { url, format } => {
            let mut config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            if let Some(api_url) = cli.api_url {
                config.api_url = api_url;
            }
            cmd::resolve::cmd_resolve(&config, &url, format).await
        }
        Commands::Query { kind, arg } => {
            cmd::query::cmd_query(kind, &arg);
            Ok(())
        }
    }
}
