//! Development server for hotel catalog UI development
//!
//! This binary runs a persistent API instance with the generated sample
//! catalog so the UI can be developed against real responses.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("Starting hotel catalog development server");

    let app = test_helpers::spawn_app().await;

    info!("API server running on http://127.0.0.1:{}", app.port);
    info!(
        "UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}
