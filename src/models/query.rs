// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter query over the point set.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Free text plus three facets. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activity: String,
}

impl FilterQuery {
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = activity.into();
        self
    }

    /// Lowercased form used for matching. The free text is also trimmed.
    pub fn normalized(&self) -> FilterQuery {
        FilterQuery {
            q: self.q.trim().to_lowercase(),
            category: self.category.to_lowercase(),
            location: self.location.to_lowercase(),
            activity: self.activity.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.q.trim().is_empty()
            && self.category.is_empty()
            && self.location.is_empty()
            && self.activity.is_empty()
    }
}
