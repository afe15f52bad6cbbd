// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line event decoding
//!
//! This fuzzes `parse_event` with arbitrary text, which must either decode or
//! return a `DecodeError`.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gort_events::parse_event;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = parse_event(line);
    }
});
