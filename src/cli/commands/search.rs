use super::{listing_controller, load_more_pages, render};
use crate::config::Config;
use crate::models::QueryState;

pub async fn cmd_search(
    config: &Config,
    query: &str,
    pages: u32,
    no_enrich: bool,
) -> anyhow::Result<()> {
    println!("Searching for: {query}");

    let state = QueryState {
        search_text: query.to_string(),
        ..QueryState::with_year(config.listing.default_year)
    };
    let controller = listing_controller(config, state, no_enrich)?;
    controller.reload().await;
    load_more_pages(&controller, pages).await;

    let movies = controller.movies().await;
    if movies.is_empty() {
        println!("No movies found matching '{query}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    render::print_movies(&movies, &config.catalog);

    Ok(())
}
