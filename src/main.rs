// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Treasure Map data loader
//!
//! Loads the point, route and trail datasets, reports what was loaded and
//! optionally exports a JSON snapshot for the static map front end.

use treasure_map::{config::Config, models::FilterQuery, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Treasure Map loader");

    let state = AppState::load(config.clone()).await;

    let outcome = state.filter(&FilterQuery::default());
    tracing::info!(
        points_loaded = outcome.is_loaded(),
        points = outcome.matches().len(),
        routes = state.routes.ready().map_or(0, |r| r.routes().len()),
        endpoints = state.endpoint_markers().len(),
        trail_loaded = state.trail.is_ready(),
        "Datasets loaded"
    );
    if let Some(facets) = state.facets() {
        tracing::info!(
            locations = ?facets.locations,
            activities = ?facets.activities,
            "Facet vocabularies"
        );
    }

    if let Some(path) = &config.snapshot_path {
        if let Err(e) = state.write_snapshot(path).await {
            if !e.is_recoverable() {
                return Err(e.into());
            }
            tracing::error!(error = %e, "Snapshot export failed");
        }
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treasure_map=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
