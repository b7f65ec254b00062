use axum_helpers::{cors_layer_from_env, server::create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use messaging::nats::NatsChannel;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Failed to install metrics recorder: {}", e))?;

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
    }

    // The queue path degrades instead of blocking startup
    info!("Connecting to NATS at {}", config.queue.nats_url);
    let nats = match NatsChannel::connect(&config.queue).await {
        Ok(channel) => {
            info!("NATS connected successfully");
            Some(channel)
        }
        Err(e) => {
            warn!(
                error = %e,
                "Failed to connect to NATS, queue-path creates will be dropped"
            );
            None
        }
    };

    let state = AppState::new(config, db, nats);

    let cors = cors_layer_from_env(&state.config.environment)?;
    let app = api::app(
        api::routes(&state),
        api::ready_router(state.db.clone()),
        state.config.app,
        cors,
    );

    info!("Starting demo API with production-ready shutdown (30s timeout)");

    // Connections move into the cleanup future
    let AppState { config, db, nats, .. } = state;

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing connections");

            tokio::join!(
                async move {
                    match db.close().await {
                        Ok(_) => info!("PostgreSQL connection closed successfully"),
                        Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                    }
                },
                async {
                    if let Some(nats) = &nats {
                        match nats.flush().await {
                            Ok(()) => info!("NATS client drained successfully"),
                            Err(e) => tracing::error!("Error flushing NATS: {}", e),
                        }
                    }
                }
            );
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Demo API shutdown complete");
    Ok(())
}
