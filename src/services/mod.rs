// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - normalization, join, search and layout logic.

pub mod activities;
pub mod category;
pub mod chips;
pub mod debounce;
pub mod fields;
pub mod loader;
pub mod presentation;
pub mod records;
pub mod routes;
pub mod search;

pub use category::classify;
pub use chips::{fit_chips, ChipLayout, ChipMeasure, ChipRow};
pub use debounce::Debouncer;
pub use fields::{FieldSchema, RawRow};
pub use loader::{LoadError, LoadedData};
pub use routes::RouteNetwork;
pub use search::{FacetVocabulary, FilterOutcome, PointCatalog};
