// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Treasure Map: points of interest and kayak routes for an interactive map.
//!
//! This crate normalizes the tabular and GeoJSON inputs behind the map,
//! joins kayak route attributes to their geometry, answers filter and search
//! queries, and lays out activity chips.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use anyhow::Context;
use config::Config;
use error::{AppError, Result};
use models::view::{DetailView, FilterChip, MapFrame, PopupView, SidebarItem};
use models::{Dataset, EndpointMarker, FilterQuery, KayakRoute, PointOfInterest, TrailLayer};
use serde::Serialize;
use services::loader::{self, LoadedData};
use services::presentation;
use services::{Debouncer, FacetVocabulary, FilterOutcome, PointCatalog, RouteNetwork};
use std::path::Path;
use std::sync::Arc;

/// Shared application state. Each dataset is written once when its load
/// completes and only read afterwards.
pub struct AppState {
    pub config: Config,
    pub points: Dataset<PointCatalog>,
    pub routes: Dataset<RouteNetwork>,
    pub trail: Dataset<TrailLayer>,
}

/// Serializable export of everything the static front end draws.
#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub points: &'a [PointOfInterest],
    pub facets: Option<&'a FacetVocabulary>,
    pub routes: &'a [KayakRoute],
    pub endpoints: &'a [EndpointMarker],
    pub trail: Option<&'a TrailLayer>,
}

impl AppState {
    pub fn new(config: Config, data: LoadedData) -> Self {
        Self {
            config,
            points: data.points,
            routes: data.routes,
            trail: data.trail,
        }
    }

    /// Load every dataset; failures leave that dataset empty.
    pub async fn load(config: Config) -> Self {
        let data = loader::load_all(&config).await;
        Self::new(config, data)
    }

    /// Filter the point set. Distinguishes "not loaded" from "no matches".
    pub fn filter(&self, query: &FilterQuery) -> FilterOutcome<'_> {
        match self.points.ready() {
            Some(catalog) => FilterOutcome::Loaded(catalog.filter(query)),
            None => FilterOutcome::NotLoaded,
        }
    }

    /// Coalesce rapid query changes: once input has been quiet for
    /// `config.search_debounce`, the latest query is filtered and handed to
    /// `on_results` with its outcome.
    pub fn search_debouncer<F>(self: &Arc<Self>, mut on_results: F) -> Debouncer<FilterQuery>
    where
        F: FnMut(&FilterQuery, &FilterOutcome<'_>) + Send + 'static,
    {
        let state = Arc::clone(self);
        Debouncer::new(self.config.search_debounce, move |query: FilterQuery| {
            let outcome = state.filter(&query);
            tracing::debug!(q = %query.q, matches = outcome.matches().len(), "Search settled");
            on_results(&query, &outcome);
        })
    }

    /// Facet options from the full point set.
    pub fn facets(&self) -> Option<&FacetVocabulary> {
        self.points.ready().map(PointCatalog::facets)
    }

    pub fn point(&self, id: &str) -> Option<&PointOfInterest> {
        self.points.ready()?.get(id)
    }

    pub fn popup(&self, id: &str) -> Option<PopupView> {
        self.point(id).map(presentation::popup_view)
    }

    pub fn detail(&self, id: &str) -> Option<DetailView> {
        let catalog = self.points.ready()?;
        let record = catalog.get(id)?;
        Some(presentation::detail_view(catalog.records(), record))
    }

    pub fn sidebar(&self, outcome: &FilterOutcome<'_>) -> Vec<SidebarItem> {
        outcome
            .matches()
            .iter()
            .map(|r| presentation::sidebar_item(r))
            .collect()
    }

    pub fn filter_chips(&self, query: &FilterQuery, outcome: &FilterOutcome<'_>) -> Vec<FilterChip> {
        presentation::filter_chips(query, outcome.matches().len())
    }

    pub fn frame(&self, outcome: &FilterOutcome<'_>) -> MapFrame {
        presentation::map_frame(
            outcome.matches(),
            self.config.default_center,
            self.config.default_zoom,
        )
    }

    /// Kayak endpoint markers; these never go through the filter.
    pub fn endpoint_markers(&self) -> &[EndpointMarker] {
        self.routes
            .ready()
            .map(RouteNetwork::endpoints)
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let catalog = self.points.ready();
        let routes = self.routes.ready();
        Snapshot {
            points: catalog.map(PointCatalog::records).unwrap_or_default(),
            facets: catalog.map(PointCatalog::facets),
            routes: routes.map(RouteNetwork::routes).unwrap_or_default(),
            endpoints: routes.map(RouteNetwork::endpoints).unwrap_or_default(),
            trail: self.trail.ready(),
        }
    }

    /// Write the snapshot as JSON.
    pub async fn write_snapshot(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(&self.snapshot()).context("Serializing snapshot")?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| AppError::Snapshot(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}
