use std::sync::Arc;

use anyhow::Result;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use brainrot::{
    config::AppConfig, repositories::PgBrainrotRepository, routes, service::BrainrotService,
    state::AppState,
};
use common::database::{health_check, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Brainrot service");

    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let pool = init_pool(&config.database).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!(
            "Database connection successful ({}/{})",
            config.database.host, config.database.database
        );
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let repository = Arc::new(PgBrainrotRepository::new(pool.clone()));
    let app_state = AppState {
        brainrot_service: BrainrotService::new(repository),
    };

    let app = routes::create_router(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Brainrot service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Brainrot service stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
