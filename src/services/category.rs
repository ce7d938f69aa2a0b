// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category classification from free-text labels.

use crate::models::Category;

/// Slug to category. Anything not listed is [`Category::Other`].
const SYNONYMS: &[(&str, Category)] = &[
    ("nature-preserve", Category::NaturePreserve),
    ("naturepreserve", Category::NaturePreserve),
    ("preserve", Category::NaturePreserve),
    ("natural-area", Category::NaturePreserve),
    ("park", Category::Parks),
    ("parks", Category::Parks),
    ("county-park", Category::Parks),
    ("city-park", Category::Parks),
    ("wpa", Category::Wpa),
    ("waterfowl", Category::Wpa),
    ("waterfowl-production", Category::Wpa),
    ("waterfowl-production-area", Category::Wpa),
    ("kayak", Category::Kayak),
    ("kayaking", Category::Kayak),
    ("kayak-launch", Category::Kayak),
    ("paddling", Category::Kayak),
    ("other", Category::Other),
];

/// Lowercase URL-safe slug: `&` becomes `and`, runs of anything else
/// non-alphanumeric collapse to one hyphen, no leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Map any label to a canonical category. Total and pure.
pub fn classify(input: &str) -> Category {
    let slug = slugify(input);
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
