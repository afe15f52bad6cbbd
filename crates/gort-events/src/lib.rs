// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gort-events: decoding and formatting of `go test -json` events
//!
//! This library crate turns the JSON lines written by `go test -json` into
//! structured events and renders the per-test pass/fail outcomes as short,
//! colored lines for the `gort` binary.
//!
//! # Example
//!
//! ```
//! use gort_events::{is_relevant, parse_event, render};
//!
//! let line = r#"{"Action":"fail","Package":"example.com/m","Test":"Test_division_by_zero"}"#;
//! let event = parse_event(line).unwrap();
//! if is_relevant(&event) {
//!     assert_eq!(render(&event), "\x1b[31m✗ Test division by zero\x1b[0m");
//! }
//! ```

pub mod error;
pub mod event;
pub mod format;

pub use error::DecodeError;
pub use event::{TestEvent, parse_event};
pub use format::{Outcome, display_name, is_relevant, render};

