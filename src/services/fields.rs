// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field normalization: alias-based column lookup and scalar coercion.

use std::collections::HashMap;

/// Canonical point-of-interest fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Category,
    Description,
    Lat,
    Lon,
    Address,
    Website,
    Photo,
    Icon,
    Activities,
    Location,
}

/// Fields a usable row cannot do without.
const REQUIRED: [Field; 3] = [Field::Name, Field::Lat, Field::Lon];

/// Column aliases accepted in `treasures.csv`, version 1.
const TREASURES_V1: &[(Field, &[&str])] = &[
    (Field::Id, &["id"]),
    (Field::Name, &["name", "title"]),
    (Field::Category, &["category", "type"]),
    (Field::Description, &["description", "desc"]),
    (Field::Lat, &["lat", "latitude"]),
    (Field::Lon, &["lon", "long", "longitude", "lng"]),
    (Field::Address, &["address", "addr"]),
    (Field::Website, &["website", "url", "link"]),
    (Field::Photo, &["photo", "image", "img"]),
    (Field::Icon, &["icon"]),
    (Field::Activities, &["activities"]),
    (Field::Location, &["location", "city", "town", "municipality"]),
];

/// Canonical field to ordered source aliases. Earlier aliases win.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub version: u32,
    aliases: Vec<(Field, Vec<String>)>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::treasures_v1()
    }
}

impl FieldSchema {
    /// Schema for `treasures.csv`.
    pub fn treasures_v1() -> Self {
        Self::new(1, TREASURES_V1)
    }

    /// Build a schema; aliases are trimmed and lowercased.
    pub fn new(version: u32, entries: &[(Field, &[&str])]) -> Self {
        let aliases = entries
            .iter()
            .map(|(field, names)| (*field, names.iter().map(|n| normalize_key(n)).collect()))
            .collect();
        Self { version, aliases }
    }

    pub fn aliases(&self, field: Field) -> &[String] {
        self.aliases
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// Required fields with no matching header. Empty means the input is usable.
    pub fn missing_required<S: AsRef<str>>(&self, headers: &[S]) -> Vec<Field> {
        let present: Vec<String> = headers.iter().map(|h| normalize_key(h.as_ref())).collect();
        REQUIRED
            .into_iter()
            .filter(|field| !self.aliases(*field).iter().any(|a| present.contains(a)))
            .collect()
    }

    /// First non-empty value among the field's aliases.
    pub fn pick(&self, row: &RawRow, field: Field) -> Option<String> {
        self.aliases(field).iter().find_map(|alias| row.get(alias))
    }

    /// Numeric field as a finite float.
    pub fn pick_number(&self, row: &RawRow, field: Field) -> Option<f64> {
        self.pick(row, field).and_then(|v| parse_coordinate(&v))
    }
}

/// Header normalization: trimmed, lowercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// A tabular row with normalized header keys.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    values: HashMap<String, String>,
}

impl RawRow {
    /// Later duplicates of a normalized header overwrite earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
            .collect();
        Self { values }
    }

    /// Trimmed value under a normalized key, if non-empty.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.values.get(key)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Parse a coordinate, accepting a decimal comma. Non-finite input is absent.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replacen(',', ".", 1);
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
