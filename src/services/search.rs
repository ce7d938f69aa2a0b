// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering and free-text search over the loaded point set.

use crate::models::{FilterQuery, PointOfInterest};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Selectable facet values, computed once from the unfiltered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FacetVocabulary {
    pub locations: Vec<String>,
    pub activities: Vec<String>,
}

impl FacetVocabulary {
    pub fn from_records(records: &[PointOfInterest]) -> Self {
        let locations = distinct_sorted(records.iter().filter_map(|r| r.location.as_deref()));
        let activities = distinct_sorted(
            records
                .iter()
                .flat_map(|r| r.activities.iter().map(String::as_str)),
        );
        Self {
            locations,
            activities,
        }
    }
}

/// Result of filtering. An empty match list is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    /// The point dataset has not loaded (or failed to)
    NotLoaded,
    Loaded(Vec<&'a PointOfInterest>),
}

impl<'a> FilterOutcome<'a> {
    pub fn matches(&self) -> &[&'a PointOfInterest] {
        match self {
            FilterOutcome::NotLoaded => &[],
            FilterOutcome::Loaded(matches) => matches,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FilterOutcome::Loaded(_))
    }

    /// Loaded, but nothing matched.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, FilterOutcome::Loaded(m) if m.is_empty())
    }
}

/// The active point set with its facet vocabularies. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct PointCatalog {
    records: Vec<PointOfInterest>,
    facets: FacetVocabulary,
    by_id: HashMap<String, usize>,
}

impl PointCatalog {
    pub fn new(records: Vec<PointOfInterest>) -> Self {
        let facets = FacetVocabulary::from_records(&records);
        // Later duplicates take over the id.
        let by_id = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();

        tracing::info!(
            records = records.len(),
            locations = facets.locations.len(),
            activities = facets.activities.len(),
            "Point catalog ready"
        );

        Self {
            records,
            facets,
            by_id,
        }
    }

    pub fn records(&self) -> &[PointOfInterest] {
        &self.records
    }

    pub fn facets(&self) -> &FacetVocabulary {
        &self.facets
    }

    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching every part of the query, in dataset order.
    pub fn filter(&self, query: &FilterQuery) -> Vec<&PointOfInterest> {
        let query = query.normalized();
        self.records
            .iter()
            .filter(|record| matches_query(record, &query))
            .collect()
    }
}

/// Check one record against an already normalized query.
pub fn matches_query(record: &PointOfInterest, query: &FilterQuery) -> bool {
    let category_ok = query.category.is_empty() || record.category.as_str() == query.category;
    let location_ok = query.location.is_empty()
        || record
            .location
            .as_deref()
            .is_some_and(|l| l.to_lowercase() == query.location);
    let activity_ok = query.activity.is_empty()
        || record
            .activities
            .iter()
            .any(|a| a.to_lowercase() == query.activity);
    let text_ok = query.q.is_empty() || haystack(record).contains(&query.q);

    category_ok && location_ok && activity_ok && text_ok
}

/// Lowercased text searched by the free-text query.
fn haystack(record: &PointOfInterest) -> String {
    format!(
        "{} {} {} {} {}",
        record.name,
        record.description,
        record.address.as_deref().unwrap_or_default(),
        record.category.as_str(),
        record.activities.join(" ")
    )
    .to_lowercase()
}

/// Distinct non-empty values, sorted case-insensitively.
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect();
    out.sort_by(|a, b| collate(a, b));
    out
}

/// Lowercased with accents stripped, so "Élan" sorts with "elan".
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Accent- and case-insensitive ordering, then accents, then case.
fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_groups_case() {
        let mut values = vec!["beta", "Alpha", "alpha", "Beta"];
        values.sort_by(|a, b| collate(a, b));
        assert_eq!(values, vec!["alpha", "Alpha", "beta", "Beta"]);
    }

    #[test]
    fn test_collate_folds_accents() {
        let mut values = vec!["Zenda", "Élan", "elan", "Eagle"];
        values.sort_by(|a, b| collate(a, b));
        assert_eq!(values, vec!["Eagle", "elan", "Élan", "Zenda"]);
    }

    #[test]
    fn test_distinct_sorted_drops_empty() {
        let values = distinct_sorted(["Grafton", "", "Cedarburg", "Grafton"].into_iter());
        assert_eq!(values, vec!["Cedarburg", "Grafton"]);
    }
}
