// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gort-events

use serde_json::error::Category;
use thiserror::Error;

/// A line of `go test -json` output could not be decoded into a [`TestEvent`].
///
/// [`TestEvent`]: crate::event::TestEvent
#[derive(Debug, Error)]
#[error("failed to decode JSON: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

impl DecodeError {
    /// 1-based line within the decoded input where the failure was detected
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// 1-based column within the decoded input where the failure was detected
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// Whether the input was cut short, syntactically broken, or well-formed
    /// JSON of the wrong shape
    #[must_use]
    pub fn category(&self) -> Category {
        self.source.classify()
    }
}
