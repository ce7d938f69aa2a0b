// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::PathBuf;
use treasure_map::config::Config;
use treasure_map::models::{Category, PointOfInterest};
use treasure_map::AppState;

/// Config pointing at the committed sample data.
#[allow(dead_code)]
pub fn fixture_config() -> Config {
    Config::default()
}

/// Load the full app state from `data/`.
#[allow(dead_code)]
pub async fn load_fixture_state() -> AppState {
    AppState::load(fixture_config()).await
}

/// A scratch directory unique to one test.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("treasure-map-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Build a record with coordinates and nothing else interesting.
#[allow(dead_code)]
pub fn point(id: &str, name: &str, category: Category, activities: &[&str]) -> PointOfInterest {
    PointOfInterest {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: String::new(),
        lat: Some(43.3),
        lon: Some(-87.9),
        address: None,
        website: None,
        photo: None,
        icon: None,
        activities: activities.iter().map(|a| a.to_string()).collect(),
        location: None,
    }
}
