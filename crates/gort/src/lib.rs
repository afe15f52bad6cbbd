// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gort library
//!
//! This module exports the plumbing of the `gort` binary (configuration, the
//! line-by-line translation loop and the `go test` runner) for use in
//! integration tests and as a library.

pub mod config;
pub mod error;
pub mod runner;
pub mod stream;

pub use error::GortError;
