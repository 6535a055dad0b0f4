//! Starter Site - server binary

use starter_site::{config, server};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--version") {
        println!("Version: {}", starter_site::version());
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starter_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Starter Site v{} ({})",
        starter_site::version(),
        starter_site::git_sha()
    );

    let config = config::load_config()?;
    tracing::info!(
        port = config.port,
        env = %config.env,
        debug = config.debug,
        "Configuration loaded"
    );

    let state = server::AppState::new(config);
    if let Err(e) = server::serve(state).await {
        tracing::error!(error = %e, "Error shutting down server");
        return Err(e);
    }

    Ok(())
}
