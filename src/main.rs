use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tepidolacuenta::adapters::auth::JwtSessionValidator;
use tepidolacuenta::adapters::http::RouterSettings;
use tepidolacuenta::adapters::postgres::run_migrations;
use tepidolacuenta::app::{App, AppSettings, Repositories};
use tepidolacuenta::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let repos = if config.database.is_configured() {
        let pool = PgPoolOptions::new()
            .min_connections(config.database.min_connections)
            .max_connections(config.database.max_connections)
            .acquire_timeout(config.database.acquire_timeout())
            .idle_timeout(config.database.idle_timeout())
            .max_lifetime(config.database.max_lifetime())
            .connect(&config.database.url)
            .await?;

        if config.database.run_migrations {
            run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
        }
        Repositories::postgres(pool)
    } else {
        tracing::warn!("No database URL configured, using in-memory storage");
        Repositories::in_memory()
    };

    let validator = Arc::new(JwtSessionValidator::new(
        &config.auth.secret(),
        config.auth.leeway_secs,
    ));

    let settings = AppSettings {
        qr_base_url: config.qr.base_url.clone(),
        query_timeout: config.database.query_timeout(),
        outbound_buffer_capacity: config.hub.outbound_buffer_capacity,
        router: RouterSettings {
            cors_origins: config.server.cors_origins_list(),
            request_timeout: config.server.request_timeout(),
        },
    };
    let app = App::build(repos, validator, settings);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "API listening");

    axum::serve(listener, app.router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(
        open_connections = app.hub.total_connections(),
        active_restaurants = app.hub.active_restaurants().len(),
        "Server stopped"
    );
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
