// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record building: raw rows to normalized points of interest.

use crate::models::PointOfInterest;
use crate::services::activities::parse_activities;
use crate::services::category::classify;
use crate::services::fields::{Field, FieldSchema, RawRow};

/// Name given to rows that have none.
pub const PLACEHOLDER_NAME: &str = "Untitled";

/// Build one record from a row. Never drops the row.
pub fn build_record(schema: &FieldSchema, row: &RawRow, index: usize) -> PointOfInterest {
    let category_raw = schema.pick(row, Field::Category).unwrap_or_default();
    let activities_raw = schema.pick(row, Field::Activities);

    PointOfInterest {
        id: schema
            .pick(row, Field::Id)
            .unwrap_or_else(|| format!("row-{}", index)),
        name: schema
            .pick(row, Field::Name)
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        category: classify(&category_raw),
        description: schema.pick(row, Field::Description).unwrap_or_default(),
        lat: schema.pick_number(row, Field::Lat),
        lon: schema.pick_number(row, Field::Lon),
        address: schema.pick(row, Field::Address),
        website: schema.pick(row, Field::Website),
        photo: schema.pick(row, Field::Photo),
        icon: schema.pick(row, Field::Icon),
        activities: parse_activities(activities_raw.as_deref()),
        location: schema.pick(row, Field::Location),
    }
}

/// Build every row in input order, then keep only records that have a name
/// and both coordinates.
pub fn build_dataset(schema: &FieldSchema, rows: &[RawRow]) -> Vec<PointOfInterest> {
    let built: Vec<PointOfInterest> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| build_record(schema, row, index))
        .collect();

    let total = built.len();
    let kept: Vec<PointOfInterest> = built
        .into_iter()
        .filter(|record| {
            let usable = !record.name.is_empty() && record.coordinates().is_some();
            if !usable {
                tracing::debug!(id = %record.id, name = %record.name, "Dropping row without coordinates");
            }
            usable
        })
        .collect();

    tracing::info!(total, kept = kept.len(), "Built point records");
    kept
}
