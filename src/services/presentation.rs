// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Popup, sidebar and detail content derived from point records.

use crate::models::view::{
    DetailView, FilterChip, FilterChipKind, MapFrame, PopupView, SidebarItem, SimilarPlace,
};
use crate::models::{FilterQuery, PointOfInterest};
use geo::{BoundingRect, MultiPoint, Point};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

/// Shown when a record has no description.
pub const NO_DESCRIPTION: &str = "<p><em>No description yet.</em></p>";

const TEASER_MAX_CHARS: usize = 240;
const SUBTITLE_MAX_CHARS: usize = 90;
const SIMILAR_LIMIT: usize = 2;
/// Fraction of the result extent added on every side when framing.
const FRAME_PADDING: f64 = 0.15;

static FIRST_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?[.!?](?:\s|$)").unwrap_or_else(|_| unreachable!()));
static TRAILING_PARTIAL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\S*$").unwrap_or_else(|_| unreachable!()));

/// Visible text of an HTML fragment.
pub fn html_text(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}

/// Cut to `max_chars`, drop the trailing partial word, add an ellipsis.
fn shorten(text: &str, max_chars: usize) -> String {
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", TRAILING_PARTIAL_WORD.replace(&cut, ""))
}

/// Popup teaser: the original HTML if its text is short enough, otherwise a
/// truncated plain-text paragraph.
pub fn teaser(description: &str) -> String {
    if description.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    let text = html_text(description);
    if text.chars().count() <= TEASER_MAX_CHARS {
        return description.to_string();
    }
    format!("<p>{}</p>", shorten(&text, TEASER_MAX_CHARS))
}

/// First sentence of the description text, capped for the sidebar.
pub fn first_sentence(html: &str) -> String {
    let text = html_text(html);
    if text.is_empty() {
        return String::new();
    }
    let sentence = FIRST_SENTENCE
        .find(&text)
        .map_or(text.as_str(), |m| m.as_str())
        .trim();
    if sentence.chars().count() > SUBTITLE_MAX_CHARS {
        shorten(sentence, SUBTITLE_MAX_CHARS)
    } else {
        sentence.to_string()
    }
}

/// Sidebar subtitle: first sentence, else address, location or category.
pub fn subtitle(record: &PointOfInterest) -> String {
    if !record.description.is_empty() {
        return first_sentence(&record.description);
    }
    record
        .address
        .clone()
        .or_else(|| record.location.clone())
        .unwrap_or_else(|| record.category.as_str().to_string())
}

/// Google Maps directions link to the record.
pub fn directions_url(record: &PointOfInterest) -> String {
    let coords = match record.coordinates() {
        Some((lat, lon)) => format!("{},{}", lat, lon),
        None => String::new(),
    };
    format!(
        "https://www.google.com/maps?q={}&daddr={}",
        encode_component(&coords),
        encode_component(&record.name)
    )
}

/// Percent-encode a URL component, leaving the sub-delimiters
/// `!'()*` literal as browsers' `encodeURIComponent` does.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Up to two other records in the same category, in dataset order.
pub fn similar<'a>(records: &'a [PointOfInterest], current: &PointOfInterest) -> Vec<&'a PointOfInterest> {
    records
        .iter()
        .filter(|r| !std::ptr::eq(*r, current) && r.category == current.category)
        .take(SIMILAR_LIMIT)
        .collect()
}

pub fn popup_view(record: &PointOfInterest) -> PopupView {
    PopupView {
        id: record.id.clone(),
        name: record.name.clone(),
        icon: record.icon_path(),
        activities: record.activities.clone(),
        photo: record.photo.clone(),
        teaser: teaser(&record.description),
        website: record.website.clone(),
        directions_url: directions_url(record),
    }
}

pub fn sidebar_item(record: &PointOfInterest) -> SidebarItem {
    SidebarItem {
        id: record.id.clone(),
        name: record.name.clone(),
        icon: record.icon_path(),
        subtitle: subtitle(record),
        activities: record.activities.clone(),
    }
}

pub fn detail_view(records: &[PointOfInterest], record: &PointOfInterest) -> DetailView {
    let similar = similar(records, record)
        .into_iter()
        .filter_map(|r| {
            let (lat, lon) = r.coordinates()?;
            Some(SimilarPlace {
                name: r.name.clone(),
                lat,
                lon,
            })
        })
        .collect();

    DetailView {
        id: record.id.clone(),
        name: record.name.clone(),
        category: record.category.as_str().to_string(),
        location: record.location.clone(),
        activities: record.activities.clone(),
        photo: record.photo.clone(),
        description: if record.description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            record.description.clone()
        },
        address: record.address.clone(),
        website: record.website.clone(),
        directions_url: directions_url(record),
        similar,
    }
}

/// One chip per active filter, then the result count.
pub fn filter_chips(query: &FilterQuery, count: usize) -> Vec<FilterChip> {
    let query = query.normalized();
    let mut chips = Vec::new();
    let mut add = |kind, label: String| chips.push(FilterChip { kind, label });

    if !query.q.is_empty() {
        add(FilterChipKind::Search, format!("Search: \"{}\" ✕", query.q));
    }
    if !query.category.is_empty() {
        add(FilterChipKind::Category, format!("Type: {} ✕", query.category));
    }
    if !query.location.is_empty() {
        add(FilterChipKind::Location, format!("Location: {} ✕", query.location));
    }
    if !query.activity.is_empty() {
        add(FilterChipKind::Activity, format!("Activity: {} ✕", query.activity));
    }
    let plural = if count == 1 { "" } else { "s" };
    add(FilterChipKind::Count, format!("{} result{}", count, plural));

    chips
}

/// Frame the results' extent, padded; fall back to the default view.
pub fn map_frame(results: &[&PointOfInterest], default_center: (f64, f64), default_zoom: u8) -> MapFrame {
    let points: MultiPoint<f64> = results
        .iter()
        .filter_map(|r| r.coordinates())
        .map(|(lat, lon)| Point::new(lon, lat))
        .collect();

    match points.bounding_rect() {
        Some(rect) => {
            let pad_x = rect.width() * FRAME_PADDING;
            let pad_y = rect.height() * FRAME_PADDING;
            MapFrame::Bounds {
                south_west: (rect.min().y - pad_y, rect.min().x - pad_x),
                north_east: (rect.max().y + pad_y, rect.max().x + pad_x),
            }
        }
        None => MapFrame::Default {
            center: default_center,
            zoom: default_zoom,
        },
    }
}
