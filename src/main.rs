use screenz::{Catalog, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,screenz=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::connect(&config.database_url).await?;
    let stars = catalog.ensure_stars(&config.rating_stars).await?;

    tracing::info!(
        stars = stars.len(),
        categories = catalog.categories().await?.len(),
        genres = catalog.genres().await?.len(),
        movies = catalog.movies().await?.len(),
        published = catalog.published_movies().await?.len(),
        "catalogue ready"
    );

    Ok(())
}
