// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Condensed terminal rendering of test events
//!
//! Only per-test pass/fail outcomes are rendered. Each becomes one line: a
//! colored glyph followed by the test's display name.
//!
//! # Example
//!
//! ```
//! use gort_events::event::parse_event;
//! use gort_events::format::{is_relevant, render};
//!
//! let event = parse_event(r#"{"Action":"pass","Test":"TestParse/empty_input"}"#).unwrap();
//! assert!(is_relevant(&event));
//! assert_eq!(render(&event), "\x1b[32m✓ empty input\x1b[0m");
//! ```

use crate::event::TestEvent;

/// Escape sequence switching the terminal foreground to green
pub const SUCCESS_COLOR: &str = "\x1b[32m";

/// Escape sequence switching the terminal foreground to red
pub const FAILURE_COLOR: &str = "\x1b[31m";

/// Escape sequence restoring default terminal attributes
pub const RESET: &str = "\x1b[0m";

/// Glyph prefixed to passed tests
pub const PASS_GLYPH: char = '✓';

/// Glyph prefixed to failed tests
pub const FAIL_GLYPH: char = '✗';

/// Separator between a parent test and its subtest
pub const SUBTEST_SEPARATOR: char = '/';

/// Outcome of a relevant event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Test passed
    Pass,
    /// Test failed
    Fail,
}

impl Outcome {
    /// Glyph shown in front of the test name
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Pass => PASS_GLYPH,
            Self::Fail => FAIL_GLYPH,
        }
    }

    /// Escape sequence selecting the outcome's color
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Pass => SUCCESS_COLOR,
            Self::Fail => FAILURE_COLOR,
        }
    }
}

/// Whether `event` is a per-test pass or fail
///
/// Package-level pass/fail events (empty `test`) and every other action,
/// including "skip", are not relevant.
#[must_use]
pub fn is_relevant(event: &TestEvent) -> bool {
    (event.is_pass() || event.is_fail()) && !event.test.is_empty()
}

/// Human-readable name of a test
///
/// Underscores become spaces, and for subtests everything up to and including
/// the first `/` is dropped.
#[must_use]
pub fn display_name(test: &str) -> String {
    let name = test.replace('_', " ");
    match name.split_once(SUBTEST_SEPARATOR) {
        Some((_, leaf)) => leaf.to_string(),
        None => name,
    }
}

/// Render a relevant event as a single colored line, without a trailing newline
///
/// Callers must check [`is_relevant`] first. Any action other than "pass" is
/// rendered as a failure.
#[must_use]
pub fn render(event: &TestEvent) -> String {
    debug_assert!(
        is_relevant(event),
        "render called on irrelevant event: {event:?}"
    );

    let outcome = if event.is_pass() {
        Outcome::Pass
    } else {
        Outcome::Fail
    };

    format!(
        "{}{} {}{}",
        outcome.color(),
        outcome.glyph(),
        display_name(&event.test),
        RESET
    )
}
