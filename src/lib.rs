pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod domain;
pub mod models;
pub mod services;

use anyhow::Context;
use clap::CommandFactory;
use cli::{Cli, Commands};
pub use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `general.log_level`.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    Ok(())
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if let Commands::Init = command {
        if Config::create_default_if_missing()? {
            println!("Created moviefix.toml");
            println!("Set catalog.api_key (or MOVIEFIX_API_KEY) before browsing.");
        } else {
            println!("moviefix.toml already exists");
        }
        return Ok(());
    }

    config.validate()?;
    info!(
        base_url = %config.catalog.base_url,
        enrichment = ?config.listing.enrichment,
        "MovieFix starting"
    );

    match command {
        Commands::Genres => cli::cmd_genres(&config).await,
        Commands::Browse {
            year,
            genre,
            pages,
            no_enrich,
        } => cli::cmd_browse(&config, year, genre, pages, no_enrich).await,
        Commands::Search {
            query,
            pages,
            no_enrich,
        } => cli::cmd_search(&config, &query.join(" "), pages, no_enrich).await,
        Commands::Info { id } => cli::cmd_movie_info(&config, &id).await,
        Commands::Init => Ok(()),
    }
}
