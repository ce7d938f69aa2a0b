// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kayak route records: attribute rows, joined routes and endpoint markers.

use crate::models::poi::PointOfInterest;
use geo::{BoundingRect, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Join key column shared by the route CSV and the route GeoJSON.
pub const ROUTE_ID_FIELD: &str = "Route_ID";

/// One typed row of the route attribute CSV, keyed by header.
pub type AttributeRow = Map<String, Value>;

/// A route geometry feature merged with its attribute row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KayakRoute {
    /// Join key, if the feature carried one
    pub route_id: Option<String>,
    /// Feature properties with attribute fields laid over them
    pub properties: AttributeRow,
    pub geometry: Option<geojson::Geometry>,
    /// Whether an attribute row was found for this feature
    pub matched: bool,
}

impl KayakRoute {
    /// Look up a merged property as a string, trimmed and non-empty.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<String> {
        self.text("Route_Name")
    }

    /// Route distance in miles, if the attribute row had one.
    pub fn distance_mi(&self) -> Option<f64> {
        self.properties
            .get("Distance_mi")
            .and_then(Value::as_f64)
            .filter(|d| d.is_finite())
    }

    /// Line geometry as `geo` lines. Non-line geometry yields `None`.
    pub fn lines(&self) -> Option<MultiLineString<f64>> {
        use std::convert::TryInto;

        let value = self.geometry.as_ref()?.value.clone();

        let line_result: Result<LineString<f64>, _> = value.clone().try_into();
        if let Ok(line) = line_result {
            return Some(MultiLineString::new(vec![line]));
        }

        value.try_into().ok()
    }

    /// Bounding box of the route line (x = lon, y = lat).
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.lines()?.bounding_rect()
    }
}

/// Which end of a route an endpoint marker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum EndpointKind {
    PutIn,
    TakeOut,
}

impl EndpointKind {
    pub fn label(&self) -> &'static str {
        match self {
            EndpointKind::PutIn => "Put-in",
            EndpointKind::TakeOut => "Take-out",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            EndpointKind::PutIn => "put-in",
            EndpointKind::TakeOut => "take-out",
        }
    }
}

/// Synthetic marker for a route put-in or take-out.
///
/// Only drawn on the map; never part of the searchable point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EndpointMarker {
    pub route_id: String,
    pub kind: EndpointKind,
    /// Point record with category fixed to kayak
    pub point: PointOfInterest,
}
