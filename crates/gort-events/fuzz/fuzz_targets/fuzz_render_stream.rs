// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the decode-then-render path
//!
//! Every line that decodes into a relevant event must render to a string
//! framed by a color escape and a reset.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gort_events::format::RESET;
use gort_events::{is_relevant, parse_event, render};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for line in input.lines() {
            let Ok(event) = parse_event(line) else {
                continue;
            };
            if is_relevant(&event) {
                let rendered = render(&event);
                assert!(rendered.starts_with('\x1b'));
                assert!(rendered.ends_with(RESET));
            }
        }
    }
});
