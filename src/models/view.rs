// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation view models handed to the map front end.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Marker popup content.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PopupView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub activities: Vec<String>,
    pub photo: Option<String>,
    /// HTML teaser, already truncated
    pub teaser: String,
    pub website: Option<String>,
    pub directions_url: String,
}

/// One card in the sidebar list.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SidebarItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub subtitle: String,
    /// Full tag list; the chip layout decides how many are shown
    pub activities: Vec<String>,
}

/// A nearby suggestion in the detail drawer.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SimilarPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Detail drawer content.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: Option<String>,
    pub activities: Vec<String>,
    pub photo: Option<String>,
    /// Raw description HTML, or the placeholder
    pub description: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub directions_url: String,
    pub similar: Vec<SimilarPlace>,
}

/// What a filter chip clears when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FilterChipKind {
    Search,
    Category,
    Location,
    Activity,
    /// Result count, not clearable
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterChip {
    pub kind: FilterChipKind,
    pub label: String,
}

/// How the map should frame the current results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MapFrame {
    /// South-west and north-east corners as (lat, lon)
    Bounds {
        south_west: (f64, f64),
        north_east: (f64, f64),
    },
    /// Fall back to a fixed view
    Default { center: (f64, f64), zoom: u8 },
}
