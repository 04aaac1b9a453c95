//! CLI module - Command-line front end for `MovieFix`
//!
//! Renders whatever the listing controller produces; all fetching and
//! pagination decisions live in the services layer.

mod commands;

use clap::{Parser, Subcommand};

/// `MovieFix` - browse the TMDB movie catalog
/// Filter by genre and release year, search by title, page through results
#[derive(Parser)]
#[command(name = "moviefix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog genres
    #[command(alias = "g")]
    Genres,

    /// Browse popular movies by release year and genre
    #[command(alias = "b")]
    Browse {
        /// Release year (defaults to listing.default_year)
        #[arg(long)]
        year: Option<i32>,
        /// Genre ID (see `moviefix genres`)
        #[arg(long)]
        genre: Option<i64>,
        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: u32,
        /// Skip per-movie genre, cast and director lookups
        #[arg(long)]
        no_enrich: bool,
    },

    /// Search movies by title
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: u32,
        /// Skip per-movie genre, cast and director lookups
        #[arg(long)]
        no_enrich: bool,
    },

    /// Show details about one movie
    #[command(alias = "i")]
    Info {
        /// Movie ID
        id: String,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
