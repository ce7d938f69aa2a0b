// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Load state of an independently fetched dataset.

/// A dataset is written once when its load completes and is read-only after.
#[derive(Debug, Clone)]
pub enum Dataset<T> {
    /// Load not finished yet
    Pending,
    Ready(T),
    /// Load failed; the reason was logged
    Failed(String),
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Dataset::Pending
    }
}

impl<T> Dataset<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Dataset::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Dataset::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Dataset::Failed(_))
    }

    /// Collapse a load result, keeping only the error message.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Dataset::Ready(value),
            Err(e) => Dataset::Failed(e.to_string()),
        }
    }
}
