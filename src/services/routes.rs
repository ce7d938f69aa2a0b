// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kayak route join: attribute rows from CSV onto geometry from GeoJSON.
//!
//! The join is a left outer join driven by the geometry: every feature
//! produces a route, matched or not. Attribute fields override feature
//! properties on key collision.

use crate::models::poi::PointOfInterest;
use crate::models::route::{
    AttributeRow, EndpointKind, EndpointMarker, KayakRoute, ROUTE_ID_FIELD,
};
use crate::models::Category;
use geojson::FeatureCollection;
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Endpoint coordinate columns: (kind, lat column, lon column, description column).
const ENDPOINT_COLUMNS: [(EndpointKind, &str, &str, &str); 2] = [
    (EndpointKind::PutIn, "Put_in_lat", "Put_in_lon", "Start_Point"),
    (EndpointKind::TakeOut, "Take_out_lat", "Take_out_lon", "End_Point"),
];

/// Attribute rows indexed by route id.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    rows: HashMap<String, AttributeRow>,
}

impl RouteIndex {
    /// Index rows by trimmed `Route_ID`. Rows without one are skipped; a
    /// repeated id keeps the last row.
    pub fn new(rows: &[AttributeRow]) -> Self {
        let mut index = HashMap::new();
        for row in rows {
            match row.get(ROUTE_ID_FIELD).and_then(route_key) {
                Some(key) => {
                    index.insert(key, row.clone());
                }
                None => tracing::debug!("Skipping route row without Route_ID"),
            }
        }
        Self { rows: index }
    }

    pub fn get(&self, route_id: &str) -> Option<&AttributeRow> {
        self.rows.get(route_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Joined routes plus their synthetic endpoint markers. Built once per load.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    routes: Vec<KayakRoute>,
    endpoints: Vec<EndpointMarker>,
}

impl RouteNetwork {
    /// Join geometry to attribute rows and derive endpoint markers.
    pub fn build(rows: &[AttributeRow], collection: FeatureCollection) -> Self {
        let index = RouteIndex::new(rows);
        let routes = join_routes(&index, collection);
        let endpoints = rows
            .iter()
            .enumerate()
            .flat_map(|(index, row)| endpoint_markers(row, index))
            .collect::<Vec<_>>();

        tracing::info!(
            routes = routes.len(),
            matched = routes.iter().filter(|r| r.matched).count(),
            endpoints = endpoints.len(),
            "Joined kayak routes"
        );

        Self { routes, endpoints }
    }

    pub fn routes(&self) -> &[KayakRoute] {
        &self.routes
    }

    pub fn endpoints(&self) -> &[EndpointMarker] {
        &self.endpoints
    }

    pub fn route(&self, route_id: &str) -> Option<&KayakRoute> {
        self.routes
            .iter()
            .find(|r| r.route_id.as_deref() == Some(route_id))
    }
}

/// Join every feature against the index. Unmatched features are kept.
pub fn join_routes(index: &RouteIndex, collection: FeatureCollection) -> Vec<KayakRoute> {
    collection
        .features
        .into_iter()
        .map(|feature| {
            let properties = feature.properties.unwrap_or_default();
            let route_id = properties.get(ROUTE_ID_FIELD).and_then(route_key);
            let attributes = route_id.as_deref().and_then(|id| index.get(id));

            if attributes.is_none() {
                tracing::debug!(route_id = ?route_id, "Route geometry has no attribute row");
            }

            KayakRoute {
                matched: attributes.is_some(),
                properties: merge_attributes(properties, attributes),
                route_id,
                geometry: feature.geometry,
            }
        })
        .collect()
}

/// Attribute-override merge: attribute fields replace geometry properties
/// of the same name.
pub fn merge_attributes(mut properties: AttributeRow, attributes: Option<&AttributeRow>) -> AttributeRow {
    if let Some(attributes) = attributes {
        for (key, value) in attributes {
            properties.insert(key.clone(), value.clone());
        }
    }
    properties
}

/// One marker per fully specified, finite endpoint pair in the row.
///
/// Rows without a `Route_ID` still get markers, keyed `row-<index>`.
pub fn endpoint_markers(row: &AttributeRow, index: usize) -> Vec<EndpointMarker> {
    let route_id = row
        .get(ROUTE_ID_FIELD)
        .and_then(route_key)
        .unwrap_or_else(|| format!("row-{}", index));
    let route_name = text_field(row, "Route_Name");

    ENDPOINT_COLUMNS
        .iter()
        .filter_map(|(kind, lat_col, lon_col, place_col)| {
            let lat = finite_field(row, lat_col)?;
            let lon = finite_field(row, lon_col)?;
            let place = text_field(row, place_col);

            let name = match &route_name {
                Some(route) => format!("{} {}", route, kind.label()),
                None => format!("{} {}", kind.label(), route_id),
            };

            Some(EndpointMarker {
                route_id: route_id.clone(),
                kind: *kind,
                point: PointOfInterest {
                    id: format!("{}-{}", route_id, kind.slug()),
                    name,
                    category: Category::Kayak,
                    description: place.unwrap_or_default(),
                    lat: Some(lat),
                    lon: Some(lon),
                    address: None,
                    website: text_field(row, "Website_Info_Source"),
                    photo: None,
                    icon: None,
                    activities: vec!["Kayaking".to_string()],
                    location: text_field(row, "Location"),
                },
            })
        })
        .collect()
}

/// Join key from a property value: trimmed string, or a number rendered
/// without a trailing `.0` for whole values.
pub fn route_key(value: &Value) -> Option<String> {
    let key = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        _ => return None,
    };
    (!key.is_empty()).then_some(key)
}

/// Convert a raw CSV cell to a typed value: empty is null, `true`/`false`
/// are booleans, finite numbers are numbers, everything else stays text.
pub fn typed_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed {
        "true" | "TRUE" | "True" => return Value::Bool(true),
        "false" | "FALSE" | "False" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
    {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

fn finite_field(row: &AttributeRow, key: &str) -> Option<f64> {
    let value = match row.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn text_field(row: &AttributeRow, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> AttributeRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_route_key_normalization() {
        assert_eq!(route_key(&json!(" R1 ")), Some("R1".to_string()));
        assert_eq!(route_key(&json!(7)), Some("7".to_string()));
        assert_eq!(route_key(&json!(7.0)), Some("7".to_string()));
        assert_eq!(route_key(&json!(7.5)), Some("7.5".to_string()));
        assert_eq!(route_key(&json!("  ")), None);
        assert_eq!(route_key(&json!(null)), None);
    }

    #[test]
    fn test_typed_cell() {
        assert_eq!(typed_cell(""), Value::Null);
        assert_eq!(typed_cell("12"), json!(12));
        assert_eq!(typed_cell("4.5"), json!(4.5));
        assert_eq!(typed_cell("TRUE"), json!(true));
        assert_eq!(typed_cell("Milwaukee River"), json!("Milwaukee River"));
        assert_eq!(typed_cell("NaN"), json!("NaN"));
    }

    #[test]
    fn test_merge_attribute_wins() {
        let props = attrs(json!({"Route_ID": "R1", "River": "geo", "stroke": "#00f"}));
        let row = attrs(json!({"Route_ID": "R1", "River": "Milwaukee"}));

        let merged = merge_attributes(props, Some(&row));

        assert_eq!(merged["River"], json!("Milwaukee"));
        assert_eq!(merged["stroke"], json!("#00f"));
    }

    #[test]
    fn test_endpoint_cardinality() {
        let both = attrs(json!({
            "Route_ID": "R1", "Put_in_lat": 43.3, "Put_in_lon": -87.9,
            "Take_out_lat": 43.2, "Take_out_lon": -87.95
        }));
        let one = attrs(json!({
            "Route_ID": "R2", "Put_in_lat": 43.3, "Put_in_lon": -87.9,
            "Take_out_lat": "n/a", "Take_out_lon": -87.95
        }));
        let half = attrs(json!({"Route_ID": "R3", "Put_in_lat": 43.3, "Put_in_lon": null}));

        assert_eq!(endpoint_markers(&both, 0).len(), 2);
        let markers = endpoint_markers(&one, 1);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, EndpointKind::PutIn);
        assert_eq!(markers[0].point.category, Category::Kayak);
        assert!(endpoint_markers(&half, 2).is_empty());
    }

    #[test]
    fn test_endpoint_without_route_id() {
        let row = attrs(json!({
            "Route_Name": "Unnumbered", "Put_in_lat": 43.1, "Put_in_lon": -87.9
        }));

        let markers = endpoint_markers(&row, 4);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].route_id, "row-4");
        assert_eq!(markers[0].point.id, "row-4-put-in");
        assert_eq!(markers[0].point.name, "Unnumbered Put-in");
    }
}
