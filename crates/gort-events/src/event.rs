// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -json` event decoding
//!
//! Every line written by `go test -json` (through `test2json`) is a single JSON
//! object. Only the fields needed for condensed reporting are decoded; `Time`,
//! `Output` and any other keys are ignored.
//!
//! # Example
//!
//! ```
//! use gort_events::event::parse_event;
//!
//! let event = parse_event(r#"{"Action":"pass","Package":"pkg","Test":"TestAdd","Elapsed":0.01}"#)
//!     .unwrap();
//! assert_eq!(event.action, "pass");
//! assert_eq!(event.test, "TestAdd");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::DecodeError;
use crate::format::{self, Outcome};

/// `Action` value of a test that passed
pub const ACTION_PASS: &str = "pass";

/// `Action` value of a test that failed
pub const ACTION_FAIL: &str = "fail";

/// A single line of `go test -json` output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    /// What happened: "run", "pass", "fail", "output", "skip", ...
    pub action: String,
    /// Import path of the package this event belongs to
    pub package: String,
    /// Name of the test, empty for package-level events
    pub test: String,
    /// Elapsed seconds
    pub elapsed: f64,
}

impl TestEvent {
    /// Whether the event reports a passed test or package
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.action == ACTION_PASS
    }

    /// Whether the event reports a failed test or package
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.action == ACTION_FAIL
    }

    /// See [`format::is_relevant`]
    #[must_use]
    pub fn is_relevant(&self) -> bool {
        format::is_relevant(self)
    }

    /// Outcome of a relevant event, `None` for everything else
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_relevant() {
            return None;
        }
        if self.is_pass() {
            Some(Outcome::Pass)
        } else {
            Some(Outcome::Fail)
        }
    }
}

impl FromStr for TestEvent {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_event(s)
    }
}

// Decoding only accepts JSON objects, so an array never turns into a
// positional event.
impl<'de> Deserialize<'de> for TestEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EventVisitor)
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "PascalCase")]
enum Field {
    Action,
    Package,
    Test,
    Elapsed,
    #[serde(other)]
    Other,
}

struct EventVisitor;

impl<'de> Visitor<'de> for EventVisitor {
    type Value = TestEvent;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a `go test -json` event object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<TestEvent, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut event = TestEvent::default();

        // `null` leaves the field as it was, and a repeated key overwrites.
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Action => {
                    if let Some(action) = map.next_value::<Option<String>>()? {
                        event.action = action;
                    }
                }
                Field::Package => {
                    if let Some(package) = map.next_value::<Option<String>>()? {
                        event.package = package;
                    }
                }
                Field::Test => {
                    if let Some(test) = map.next_value::<Option<String>>()? {
                        event.test = test;
                    }
                }
                Field::Elapsed => {
                    if let Some(elapsed) = map.next_value::<Option<f64>>()? {
                        event.elapsed = elapsed;
                    }
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(event)
    }
}

/// Parse a single line of `go test -json` output
///
/// # Errors
///
/// Returns [`DecodeError`] if `line` is empty, is not valid JSON, or is JSON
/// that does not fit the event schema (an array, a string `Elapsed`, ...).
pub fn parse_event(line: &str) -> Result<TestEvent, DecodeError> {
    serde_json::from_str(line).map_err(|e| {
        debug!(error = %e, "Failed to decode test event");
        DecodeError::from(e)
    })
}
