// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gort

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while translating a `go test -json` stream
#[derive(Debug, Error)]
pub enum GortError {
    /// Error reading input or writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded while running in strict mode
    #[error("Malformed event on line {line}: {source}")]
    MalformedLine {
        /// 1-based line number within the stream
        line: usize,
        /// The underlying decode failure
        #[source]
        source: gort_events::DecodeError,
    },

    /// A line was not valid UTF-8 while running in strict mode
    #[error("Line {line} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// 1-based line number within the stream
        line: usize,
        /// The underlying UTF-8 failure
        #[source]
        source: std::str::Utf8Error,
    },

    /// The go binary could not be started
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        /// Program that was executed
        program: String,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
