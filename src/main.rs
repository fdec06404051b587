use std::sync::Arc;

use movie_catalog::{AppState, config::Config, db, repository::Catalog, routes, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movie_catalog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url, config.max_connections).await?;
    let catalog = Catalog::new(db);

    if let Some(path) = &config.seed_file {
        seed::load_file(&catalog, path).await?;
    }

    let app = routes::router(Arc::new(AppState { catalog }));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
