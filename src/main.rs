use anyhow::Context;
use tokio::net::TcpListener;

use school_connect::{app, app_with_static, config::Config, db, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    logging::init_logging("school_connect", &config.log_level);

    let pool = db::build_pool(&config.database_url, config.db_pool_size)
        .context("Failed to create DB pool")?;

    let router = match &config.static_dir {
        Some(dir) => {
            log::info!("Serving client from {}", dir.display());
            app_with_static(pool, dir)
        }
        None => app(pool),
    };

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;

    log::info!("Server running on http://{}", address);

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
