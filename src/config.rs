// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so a bare checkout runs against `data/`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the CSV and GeoJSON inputs
    pub data_dir: PathBuf,
    /// Quiet period before free-text search recomputes
    pub search_debounce: Duration,
    /// Where to write the JSON snapshot, if anywhere
    pub snapshot_path: Option<PathBuf>,
    /// Map view when there is nothing to frame (lat, lon)
    pub default_center: (f64, f64),
    pub default_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            search_debounce: Duration::from_millis(150),
            snapshot_path: None,
            default_center: (43.38, -87.95),
            default_zoom: 11,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let search_debounce = match env::var("SEARCH_DEBOUNCE_MS") {
            Ok(v) => Duration::from_millis(
                v.trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("SEARCH_DEBOUNCE_MS", v.clone()))?,
            ),
            Err(_) => defaults.search_debounce,
        };

        Ok(Self {
            data_dir: env::var("TREASURE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            search_debounce,
            snapshot_path: env::var("SNAPSHOT_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            ..defaults
        })
    }

    pub fn points_csv(&self) -> PathBuf {
        self.data_dir.join("treasures.csv")
    }

    pub fn routes_csv(&self) -> PathBuf {
        self.data_dir.join("kayakroutes.csv")
    }

    pub fn routes_geojson(&self) -> PathBuf {
        self.data_dir.join("kayakroutes.geojson")
    }

    pub fn trail_geojson(&self) -> PathBuf {
        self.data_dir.join("trail.geojson")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
