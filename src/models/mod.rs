// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod dataset;
pub mod poi;
pub mod query;
pub mod route;
pub mod trail;
pub mod view;

pub use dataset::Dataset;
pub use poi::{Category, PointOfInterest};
pub use query::FilterQuery;
pub use route::{AttributeRow, EndpointKind, EndpointMarker, KayakRoute};
pub use trail::TrailLayer;
