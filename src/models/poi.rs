// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point-of-interest model and the closed category set.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Directory holding one icon per canonical category.
pub const ICON_DIR: &str = "data/icons";

/// Canonical category. Never taken verbatim from input; see
/// [`crate::services::category::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    NaturePreserve,
    Parks,
    Wpa,
    Kayak,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::NaturePreserve,
        Category::Parks,
        Category::Wpa,
        Category::Kayak,
        Category::Other,
    ];

    /// Canonical key, also the icon file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NaturePreserve => "nature-preserve",
            Category::Parks => "parks",
            Category::Wpa => "wpa",
            Category::Kayak => "kayak",
            Category::Other => "other",
        }
    }

    /// Default marker icon for this category.
    pub fn icon_path(&self) -> String {
        format!("{}/{}.png", ICON_DIR, self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized point of interest built from one tabular row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointOfInterest {
    /// Input id, or `row-<index>` when the row has none
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Raw description, may contain HTML
    pub description: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub photo: Option<String>,
    /// Icon override path from the input
    pub icon: Option<String>,
    /// Title-cased tags in input order
    pub activities: Vec<String>,
    /// Free-text place name used as a facet value
    pub location: Option<String>,
}

impl PointOfInterest {
    /// Both coordinates, if present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Icon to render: the override if present, else the category icon.
    pub fn icon_path(&self) -> String {
        match &self.icon {
            Some(path) => path.clone(),
            None => self.category.icon_path(),
        }
    }
}
