mod browse;
mod genres;
mod info;
mod render;
mod search;

pub use browse::cmd_browse;
pub use genres::cmd_genres;
pub use info::cmd_movie_info;
pub use search::cmd_search;

use crate::clients::TmdbClient;
use crate::config::{Config, Enrichment};
use crate::models::QueryState;
use crate::services::{CatalogService, ListingController, LoadOutcome};
use anyhow::Context;
use std::sync::Arc;

fn catalog_service(config: &Config) -> anyhow::Result<CatalogService> {
    let client = TmdbClient::new(&config.catalog).context("Failed to create TMDB client")?;
    Ok(CatalogService::new(Arc::new(client)))
}

fn listing_controller(
    config: &Config,
    query: QueryState,
    no_enrich: bool,
) -> anyhow::Result<ListingController> {
    let enrichment = if no_enrich {
        Enrichment::Off
    } else {
        config.listing.enrichment
    };

    Ok(ListingController::with_query(
        catalog_service(config)?,
        enrichment,
        query,
    ))
}

/// Scrolls until `pages` pages are loaded or the catalog runs out.
async fn load_more_pages(controller: &ListingController, pages: u32) {
    for _ in 1..pages {
        if controller.on_end_reached().await == LoadOutcome::Skipped {
            break;
        }
    }
}
