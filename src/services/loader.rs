// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dataset loading.
//!
//! The point set, the kayak routes and the trail load independently; a
//! failure in one is logged and leaves the others untouched. Route geometry
//! is only read after the route attribute rows are parsed and indexed.

use crate::config::Config;
use crate::models::route::{AttributeRow, ROUTE_ID_FIELD};
use crate::models::{Dataset, PointOfInterest, TrailLayer};
use crate::services::fields::{FieldSchema, RawRow};
use crate::services::records::build_dataset;
use crate::services::routes::{typed_cell, RouteNetwork};
use crate::services::search::PointCatalog;
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;

/// Everything the map needs, each part loaded on its own.
#[derive(Debug, Default)]
pub struct LoadedData {
    pub points: Dataset<PointCatalog>,
    pub routes: Dataset<RouteNetwork>,
    pub trail: Dataset<TrailLayer>,
}

/// Load all datasets concurrently. Never fails as a whole.
pub async fn load_all(config: &Config) -> LoadedData {
    let schema = FieldSchema::default();
    let points_path = config.points_csv();
    let routes_csv = config.routes_csv();
    let routes_geojson = config.routes_geojson();
    let trail_path = config.trail_geojson();

    let (points, routes, trail) = tokio::join!(
        load_points(&points_path, &schema),
        load_routes(&routes_csv, &routes_geojson),
        load_trail(&trail_path),
    );

    LoadedData {
        points: contain("points", points.map(PointCatalog::new)),
        routes: contain("routes", routes),
        trail: contain("trail", trail),
    }
}

/// Log a failed load and keep only its message.
fn contain<T>(dataset: &'static str, result: Result<T, LoadError>) -> Dataset<T> {
    if let Err(e) = &result {
        tracing::error!(dataset, error = %e, "Dataset load failed");
    }
    Dataset::from_result(result)
}

/// Read and normalize the point CSV.
pub async fn load_points(path: &Path, schema: &FieldSchema) -> Result<Vec<PointOfInterest>, LoadError> {
    tracing::info!(path = %path.display(), "Loading points");
    let data = read_file(path).await?;
    parse_points_csv(&data, schema)
}

/// Parse point CSV text into the active (coordinate-complete) record set.
pub fn parse_points_csv(data: &str, schema: &FieldSchema) -> Result<Vec<PointOfInterest>, LoadError> {
    let (headers, rows) = read_csv(data)?;

    let missing = schema.missing_required(&headers);
    if !missing.is_empty() {
        tracing::warn!(
            schema_version = schema.version,
            missing = ?missing,
            "Point CSV lacks required columns"
        );
    }

    let rows: Vec<RawRow> = rows
        .into_iter()
        .map(|fields| RawRow::from_pairs(headers.iter().zip(fields)))
        .collect();

    Ok(build_dataset(schema, &rows))
}

/// Parse route CSV text into typed attribute rows.
pub fn parse_route_rows(data: &str) -> Result<Vec<AttributeRow>, LoadError> {
    let (headers, rows) = read_csv(data)?;

    if !headers.iter().any(|h| h.trim() == ROUTE_ID_FIELD) {
        return Err(LoadError::MissingColumn(ROUTE_ID_FIELD));
    }

    Ok(rows
        .into_iter()
        .map(|fields| {
            headers
                .iter()
                .zip(fields)
                .map(|(h, v)| (h.trim().to_string(), typed_cell(&v)))
                .collect()
        })
        .collect())
}

/// Load route attributes, then the route geometry, and join them.
///
/// Missing geometry leaves a network with endpoint markers but no lines.
pub async fn load_routes(csv_path: &Path, geojson_path: &Path) -> Result<RouteNetwork, LoadError> {
    tracing::info!(path = %csv_path.display(), "Loading route attributes");
    let rows = parse_route_rows(&read_file(csv_path).await?)?;
    tracing::info!(count = rows.len(), "Route attributes loaded");

    let collection = match read_file(geojson_path).await.and_then(|d| parse_feature_collection(&d)) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(path = %geojson_path.display(), error = %e, "Route geometry load failed");
            FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            }
        }
    };

    Ok(RouteNetwork::build(&rows, collection))
}

/// Load the standalone trail overlay.
pub async fn load_trail(path: &Path) -> Result<TrailLayer, LoadError> {
    let collection = parse_feature_collection(&read_file(path).await?)?;
    tracing::info!(features = collection.features.len(), "Trail loaded");
    Ok(TrailLayer::new(collection))
}

/// Parse GeoJSON text that must be a feature collection.
pub fn parse_feature_collection(data: &str) -> Result<FeatureCollection, LoadError> {
    let geojson: GeoJson = data
        .parse()
        .map_err(|e: geojson::Error| LoadError::ParseError(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(LoadError::NotFeatureCollection),
    }
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::IoError(format!("{}: {}", path.display(), e)))
}

/// Header row plus data rows. Blank lines are skipped; short rows are allowed.
fn read_csv(data: &str) -> Result<(Vec<String>, Vec<Vec<String>>), LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::CsvError(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::CsvError(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, rows))
}

/// Errors from dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("GeoJSON is not a FeatureCollection")]
    NotFeatureCollection,

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}
