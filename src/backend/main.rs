/**
 * Messagely Server Entry Point
 *
 * Loads configuration, opens the database and serves the Axum app.
 */

use messagely::backend::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::load()?;
    tracing::info!("Loaded configuration: {:?}", config);

    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
