use crate::config::CatalogConfig;
use crate::constants::NOT_AVAILABLE;
use crate::models::MovieDetail;

pub fn print_movie(movie: &MovieDetail, catalog: &CatalogConfig) {
    let summary = &movie.summary;

    println!("• {} (ID: {})", summary.title, summary.id);
    println!("  Rating:       {}", summary.rating_label());
    println!("  Release Date: {}", summary.release_date_label());
    println!("  Genres:       {}", movie.genres_label());
    println!("  Cast:         {}", movie.cast_label());
    println!("  Director:     {}", movie.director_label());
    println!(
        "  Poster:       {}",
        summary
            .poster_url(&catalog.image_base_url, &catalog.poster_size)
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
    );
    if !summary.overview.is_empty() {
        println!("  {}", summary.overview);
    }
    println!();
}

pub fn print_movies(movies: &[MovieDetail], catalog: &CatalogConfig) {
    println!("{:-<60}", "");
    for movie in movies {
        print_movie(movie, catalog);
    }
    println!("{} movies", movies.len());
}
