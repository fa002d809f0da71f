//! Bedwars leaderboard web application.
//!
//! A server-rendered CRUD application tracking players, quests, achievements,
//! titles, themes, a virtual shop, clans, tournaments, and badges. The binary
//! wires configuration, the database connection pool, versioned migrations,
//! default-data seeding, template rendering, and the HTTP router, then serves
//! requests until shutdown.
//!
//! Startup never fails on a broken database: migration, the connectivity
//! probe, and the seed pass are wrapped by an outer guard that logs the error
//! and lets the process serve anyway. Requests that need the database then
//! fail at request time instead.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _};

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod startup;
mod state;
mod view;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,tower_http=warn", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    if config.secret_key == config::DEFAULT_SECRET_KEY {
        tracing::warn!("SESSION_SECRET is not set; using the insecure development secret key");
    }

    let db = startup::connect_to_database(&config).await?;

    match startup::initialize_database(&config, &db).await {
        Ok(report) => report.log(),
        Err(err) => {
            tracing::error!("Database initialization error: {err}; continuing startup");
        }
    }

    let templates = Arc::new(view::build_templates()?);
    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(db, templates, Arc::new(config));
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("Listening on {listen_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
