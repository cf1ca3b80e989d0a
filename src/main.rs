// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Tracker API Server
//!
//! Serves the workout, food, goal and progress API over a local record
//! store, with optional Strava and Nutritionix integrations.

use fitness_tracker::{config::Config, db::FileStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Fitness Tracker API");

    let store = match &config.data_dir {
        Some(dir) => FileStore::open(dir).await?,
        None => {
            tracing::warn!("DATA_DIR is :memory:, records will not survive a restart");
            FileStore::in_memory()
        }
    };

    if config.strava.is_none() {
        tracing::info!("Strava credentials not set, import disabled");
    }
    if config.nutritionix.is_none() {
        tracing::info!("Nutritionix credentials not set, food lookup disabled");
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config, store));
    let app = fitness_tracker::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fitness_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
