// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ozaukee Interurban Trail overlay.
//!
//! The trail geometry comes from its own GeoJSON file and is never joined to
//! tabular data. Its popup content is fixed.

use geojson::FeatureCollection;
use serde::Serialize;

/// Stroke settings for the trail line.
#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: &'static str,
    pub line_join: &'static str,
}

/// Dashed deep green, drawn above the basemap.
pub const TRAIL_STYLE: LineStyle = LineStyle {
    color: "#2f7c31",
    weight: 4,
    opacity: 0.9,
    dash_array: "8 6",
    line_join: "round",
};

/// Static popup content for the trail.
#[derive(Debug, Clone, Serialize)]
pub struct TrailInfo {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// (label, url)
    pub links: &'static [(&'static str, &'static str)],
}

pub const TRAIL_INFO: TrailInfo = TrailInfo {
    title: "Ozaukee Interurban Trail",
    paragraphs: &[
        "The Ozaukee Interurban Trail was not always a trail, but the route of the \
         Interurban Electric Railway. It opened in 1908 and ran from Milwaukee to \
         Sheboygan, with stops in Brown Deer, Thiensville, Cedarburg, Grafton, Port \
         Washington, Belgium, Cedar Grove, Oostburg, and Sheboygan. Until it ceased \
         operation in 1951, many people leaving the city for work or play rode the railway.",
        "Workers used the railway to reach factory jobs making cigars, shoes, nails, and \
         pearl buttons. Blues singers traveled north in the 1920s and 30s to record at the \
         Grafton chair factory studio that became Paramount Records.",
        "After the railway closed, Wisconsin Electric (now We Energies) began converting \
         parts of the old rail bed into bike paths in 1975. In 1998 Ozaukee County and \
         several of its communities leased the land and completed the Ozaukee Interurban Trail.",
    ],
    links: &[
        ("Official Website", "https://www.interurbantrail.com/"),
        (
            "Trailside Birding Guide",
            "https://joeywillman.github.io/ozaukee-interurbantrail-birding/",
        ),
    ],
};

/// Loaded trail geometry with its static presentation.
#[derive(Debug, Clone, Serialize)]
pub struct TrailLayer {
    pub features: FeatureCollection,
    pub info: TrailInfo,
    pub style: LineStyle,
}

impl TrailLayer {
    pub fn new(features: FeatureCollection) -> Self {
        Self {
            features,
            info: TRAIL_INFO,
            style: TRAIL_STYLE,
        }
    }
}
