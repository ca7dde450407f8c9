use anyhow::{Context, Result};
use cardboard::{config, create_app, db, logging};
use clap::Parser;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Resolves when the process receives Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env, if present
    dotenv::dotenv().ok();

    let args = config::CliArgs::parse();
    let config = config::get_config(&args).context("Failed to load configuration")?;
    logging::init_logging(args.debug, config.log_dir.as_deref()).context("Failed to set up logging")?;
    info!(
        "Configuration: database_url={}, listen_addr={}, log_dir={:?}",
        config.database_url,
        config.listen_addr(),
        config.log_dir
    );

    // Initialize the database pool and bring the schema up to date
    let pool = db::init_pool(&config.database_url)?;
    {
        let mut conn = pool.get().context("Failed to get a database connection")?;
        db::run_migrations(&mut conn)?;
    }

    let app = create_app(Arc::new(pool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local_addr = listener.local_addr().context("Failed to read the bound address")?;
    info!("Listening on {}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
