use super::catalog_service;
use crate::config::Config;

pub async fn cmd_genres(config: &Config) -> anyhow::Result<()> {
    let catalog = catalog_service(config)?;
    let genres = catalog.list_genres().await;

    if genres.is_empty() {
        println!("No genres available (see log for catalog errors)");
        return Ok(());
    }

    println!("Genres:");
    println!("{:-<30}", "");
    for genre in &genres {
        println!("{:>6}  {}", genre.id, genre.name);
    }

    println!();
    println!("To filter by genre: moviefix browse --genre <ID>");

    Ok(())
}
