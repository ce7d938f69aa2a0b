// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kayak route join tests.
//!
//! Uses the committed route CSV and GeoJSON. The geometry file carries one
//! feature (`R99`) with no attribute row to exercise the outer join.

use serde_json::json;
use treasure_map::models::{Category, EndpointKind};
use treasure_map::services::loader::{load_routes, parse_feature_collection, parse_route_rows};
use treasure_map::services::routes::{endpoint_markers, RouteNetwork};
use std::path::Path;

fn fixture_network() -> RouteNetwork {
    let rows = parse_route_rows(
        &std::fs::read_to_string("data/kayakroutes.csv").expect("Failed to read kayakroutes.csv"),
    )
    .expect("Failed to parse kayakroutes.csv");
    let collection = parse_feature_collection(
        &std::fs::read_to_string("data/kayakroutes.geojson")
            .expect("Failed to read kayakroutes.geojson"),
    )
    .expect("Failed to parse kayakroutes.geojson");

    RouteNetwork::build(&rows, collection)
}

#[test]
fn test_every_feature_produces_a_route() {
    let network = fixture_network();
    assert_eq!(network.routes().len(), 3);

    let ids: Vec<Option<&str>> = network
        .routes()
        .iter()
        .map(|r| r.route_id.as_deref())
        .collect();
    assert_eq!(ids, vec![Some("R1"), Some("R2"), Some("R99")]);
}

#[test]
fn test_unmatched_feature_keeps_own_properties() {
    let network = fixture_network();
    let orphan = network.route("R99").expect("R99 should not be dropped");

    assert!(!orphan.matched);
    assert_eq!(orphan.properties.len(), 2);
    assert_eq!(orphan.name().as_deref(), Some("Unsurveyed Channel"));
    assert_eq!(orphan.distance_mi(), None);
}

#[test]
fn test_attributes_override_feature_properties() {
    let network = fixture_network();
    let r1 = network.route("R1").unwrap();

    assert!(r1.matched);
    // Feature says "unnamed", the CSV wins
    assert_eq!(r1.properties["River"], json!("Milwaukee River"));
    // Feature-only property survives
    assert_eq!(r1.properties["stroke"], json!("#1f78b4"));
    assert_eq!(r1.distance_mi(), Some(6.2));
    assert_eq!(r1.name().as_deref(), Some("Grafton to Thiensville"));
}

#[test]
fn test_route_geometry_conversion() {
    let network = fixture_network();

    let r1 = network.route("R1").unwrap();
    assert_eq!(r1.lines().map(|m| m.0.len()), Some(1));

    let r2 = network.route("R2").unwrap();
    assert_eq!(r2.lines().map(|m| m.0.len()), Some(2));

    let bounds = r1.bounds().expect("R1 should have bounds");
    assert!((bounds.min().y - 43.2354).abs() < 1e-9);
    assert!((bounds.max().x + 87.9495).abs() < 1e-9);
}

#[test]
fn test_endpoint_markers_from_fixture() {
    let network = fixture_network();
    let endpoints = network.endpoints();

    // R1 has both ends, R2 only a put-in, R3 neither
    assert_eq!(endpoints.len(), 3);
    let r2: Vec<_> = endpoints.iter().filter(|e| e.route_id == "R2").collect();
    assert_eq!(r2.len(), 1);
    assert_eq!(r2[0].kind, EndpointKind::PutIn);
    assert_eq!(r2[0].point.id, "R2-put-in");
    assert_eq!(r2[0].point.name, "Cedar Creek Sampler Put-in");

    for marker in endpoints {
        assert_eq!(marker.point.category, Category::Kayak);
        assert!(marker.point.coordinates().is_some());
    }
    assert!(!endpoints.iter().any(|e| e.route_id == "R3"));
}

#[test]
fn test_valid_put_in_invalid_take_out() {
    let row = match json!({
        "Route_ID": 12,
        "Route_Name": "Numbered",
        "Put_in_lat": 43.1,
        "Put_in_lon": -87.9,
        "Take_out_lat": "unknown",
        "Take_out_lon": -87.8
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };

    let markers = endpoint_markers(&row, 0);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].route_id, "12");
    assert_eq!(markers[0].point.lat, Some(43.1));
}

#[tokio::test]
async fn test_load_routes_sequenced_and_joined() {
    let network = load_routes(
        Path::new("data/kayakroutes.csv"),
        Path::new("data/kayakroutes.geojson"),
    )
    .await
    .expect("Route load should succeed");

    assert_eq!(network.routes().len(), 3);
    assert_eq!(network.routes().iter().filter(|r| r.matched).count(), 2);
}

#[tokio::test]
async fn test_missing_geometry_keeps_endpoints() {
    let network = load_routes(
        Path::new("data/kayakroutes.csv"),
        Path::new("data/does-not-exist.geojson"),
    )
    .await
    .expect("Attribute rows alone should still load");

    assert!(network.routes().is_empty());
    assert_eq!(network.endpoints().len(), 3);
}

#[tokio::test]
async fn test_missing_attributes_fails_routes() {
    let result = load_routes(
        Path::new("data/does-not-exist.csv"),
        Path::new("data/kayakroutes.geojson"),
    )
    .await;

    assert!(result.is_err(), "Routes need their attribute rows");
}
