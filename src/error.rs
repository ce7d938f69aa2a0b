// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Normalization never fails; these cover startup and snapshot export only.
//! Per-dataset load failures are contained in [`crate::models::Dataset`].

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write snapshot: {0}")]
    Snapshot(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Errors after which the loaded map data is still usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Snapshot(_))
    }
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
