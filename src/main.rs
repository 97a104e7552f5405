use marquee::{Config, MovieRepository, RoomRepository, db, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,marquee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env();

    let db = db::connect_and_migrate(&config.database_url).await?;
    seed::seed_if_empty(&db).await?;

    let movies = MovieRepository::new(db.clone()).list_all().await?;
    let rooms = RoomRepository::new(db).list_all().await?;
    tracing::info!(movies = movies.len(), rooms = rooms.len(), "store ready");

    Ok(())
}
