use super::{catalog_service, render};
use crate::config::Config;
use crate::domain::MovieId;

pub async fn cmd_movie_info(config: &Config, id_str: &str) -> anyhow::Result<()> {
    let Ok(id) = id_str.parse::<MovieId>() else {
        println!("Invalid movie ID: {id_str}");
        return Ok(());
    };

    let catalog = catalog_service(config)?;
    let Some(detail) = catalog.movie(id).await else {
        println!("Movie not found: {id}");
        return Ok(());
    };

    println!("Movie Info");
    println!("{:-<60}", "");
    render::print_movie(&detail, &config.catalog);

    Ok(())
}
