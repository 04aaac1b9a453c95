use super::{listing_controller, load_more_pages, render};
use crate::config::Config;
use crate::domain::GenreId;
use crate::models::QueryState;

pub async fn cmd_browse(
    config: &Config,
    year: Option<i32>,
    genre: Option<i64>,
    pages: u32,
    no_enrich: bool,
) -> anyhow::Result<()> {
    let query = QueryState {
        genre: genre.map(GenreId::new),
        ..QueryState::with_year(year.unwrap_or(config.listing.default_year))
    };
    let controller = listing_controller(config, query, no_enrich)?;

    controller.start().await;

    if let Some(genre) = genre.map(GenreId::new)
        && !controller.genres().await.iter().any(|g| g.id == genre)
    {
        println!("Unknown genre ID {genre}; run `moviefix genres` to list them");
    }

    load_more_pages(&controller, pages).await;

    let snapshot = controller.snapshot().await;
    let genre_name = snapshot
        .query
        .genre
        .and_then(|id| snapshot.genres.iter().find(|g| g.id == id))
        .map_or("All genres", |g| g.name.as_str());

    println!(
        "Popular movies of {} | {} | {} page(s)",
        snapshot.query.year, genre_name, snapshot.query.page
    );

    if snapshot.movies.is_empty() {
        println!("No movies found");
        return Ok(());
    }

    render::print_movies(&snapshot.movies, &config.catalog);

    Ok(())
}
