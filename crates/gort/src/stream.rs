// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line-by-line translation of a `go test -json` stream
//!
//! Each input line is decoded on its own and, when it is a per-test pass or
//! fail, written out immediately as one rendered line. Output order follows
//! input order.
//!
//! # Example
//!
//! ```
//! use gort::stream::{StreamOptions, translate};
//!
//! let input = r#"{"Action":"pass","Test":"TestAdd"}"#;
//! let mut output = Vec::new();
//! let outcome = translate(input.as_bytes(), &mut output, &StreamOptions::default()).unwrap();
//! assert!(!outcome.any_failed);
//! assert_eq!(String::from_utf8(output).unwrap(), "\x1b[32m✓ TestAdd\x1b[0m\n");
//! ```

use std::io::{self, BufRead, Write};

use gort_events::{is_relevant, parse_event, render};
use tracing::{debug, trace, warn};

use crate::error::GortError;

/// How the translation loop treats its input
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    /// Fail on the first malformed line instead of skipping it
    pub strict: bool,
}

/// What happened while translating a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Lines read, blank ones included
    pub lines: usize,
    /// Lines skipped because they were not valid events
    pub malformed: usize,
    /// Whether any rendered event was a failed test
    pub any_failed: bool,
}

/// Translate `reader` into rendered lines on `writer`
///
/// Blank lines are ignored. Lines that are not UTF-8 or fail to decode are
/// logged and skipped, unless `options.strict` is set. The writer is flushed
/// after every rendered line so results show up while tests are still running.
/// If the reading side of `writer` goes away (`gort | head`), translation stops
/// without an error.
///
/// # Errors
///
/// Returns `GortError::Io` if reading or writing fails, and
/// `GortError::InvalidUtf8` or `GortError::MalformedLine` for the first
/// unusable line in strict mode.
pub fn translate<R, W>(
    reader: R,
    writer: &mut W,
    options: &StreamOptions,
) -> Result<StreamOutcome, GortError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut outcome = StreamOutcome::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_number = index + 1;
        outcome.lines = line_number;

        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(source) if options.strict => {
                return Err(GortError::InvalidUtf8 {
                    line: line_number,
                    source,
                });
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "Skipping line that is not UTF-8");
                outcome.malformed += 1;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_event(line) {
            Ok(event) => event,
            Err(source) if options.strict => {
                return Err(GortError::MalformedLine {
                    line: line_number,
                    source,
                });
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "Skipping malformed test event");
                outcome.malformed += 1;
                continue;
            }
        };

        if !is_relevant(&event) {
            trace!(line = line_number, action = %event.action, "Ignoring event");
            continue;
        }

        match write_line(writer, &render(&event)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(line = line_number, "Output closed, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        }
        outcome.any_failed |= event.is_fail();
    }

    debug!(
        lines = outcome.lines,
        malformed = outcome.malformed,
        any_failed = outcome.any_failed,
        "Finished translating test output"
    );

    Ok(outcome)
}

fn write_line<W>(writer: &mut W, line: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(writer, "{line}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn run(input: &str, strict: bool) -> (Result<StreamOutcome, GortError>, String) {
        let mut output = Vec::new();
        let result = translate(input.as_bytes(), &mut output, &StreamOptions { strict });
        (
            result,
            String::from_utf8(output).expect("Output should be UTF-8"),
        )
    }

    #[test]
    fn test_renders_relevant_events_in_order() {
        let input = r#"{"Action":"run","Test":"TestA"}
{"Action":"pass","Test":"TestA","Elapsed":0.01}
{"Action":"fail","Test":"TestB/sub_case"}
{"Action":"fail","Package":"example.com/m"}"#;

        let (result, output) = run(input, false);
        let outcome = result.expect("Should translate");

        assert_eq!(
            output,
            "\x1b[32m✓ TestA\x1b[0m\n\x1b[31m✗ sub case\x1b[0m\n"
        );
        assert_eq!(
            outcome,
            StreamOutcome {
                lines: 4,
                malformed: 0,
                any_failed: true,
            }
        );
    }

    #[test]
    fn test_skips_malformed_lines_by_default() {
        let input = "N.A.\n{\"Action\":\"pass\",\"Test\":\"TestA\"}\n[]\n";
        let (result, output) = run(input, false);
        let outcome = result.expect("Should translate");

        assert_eq!(output, "\x1b[32m✓ TestA\x1b[0m\n");
        assert_eq!(outcome.malformed, 2);
        assert!(!outcome.any_failed);
    }

    #[test]
    fn test_strict_mode_reports_line_number() {
        let input = "{\"Action\":\"pass\",\"Test\":\"TestA\"}\n\nN.A.\n";
        let (result, output) = run(input, true);

        match result {
            Err(GortError::MalformedLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
        assert_eq!(output, "\x1b[32m✓ TestA\x1b[0m\n");
    }

    #[test]
    fn test_blank_lines_are_not_malformed() {
        let (result, output) = run("\n   \n\r\n", true);
        let outcome = result.expect("Should translate");
        assert_eq!(output, "");
        assert_eq!(outcome.lines, 3);
        assert_eq!(outcome.malformed, 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "{\"Action\":\"fail\",\"Test\":\"TestA\"}\r\n";
        let (result, output) = run(input, true);
        assert!(result.expect("Should translate").any_failed);
        assert_eq!(output, "\x1b[31m✗ TestA\x1b[0m\n");
    }

    #[test]
    fn test_skips_non_utf8_lines_by_default() {
        let mut input = b"{\"Action\":\"pass\",\"Test\":\"TestA\"}\n".to_vec();
        input.extend_from_slice(b"# build noise \xff\xfe\n");
        input.extend_from_slice(b"{\"Action\":\"fail\",\"Test\":\"TestB\"}\n");

        let mut output = Vec::new();
        let outcome = translate(input.as_slice(), &mut output, &StreamOptions::default())
            .expect("Should translate");

        assert_eq!(
            String::from_utf8(output).expect("Output should be UTF-8"),
            "\x1b[32m✓ TestA\x1b[0m\n\x1b[31m✗ TestB\x1b[0m\n"
        );
        assert_eq!(
            outcome,
            StreamOutcome {
                lines: 3,
                malformed: 1,
                any_failed: true,
            }
        );
    }

    #[test]
    fn test_strict_mode_rejects_non_utf8_line() {
        let input: &[u8] = b"{\"Action\":\"pass\",\"Test\":\"TestA\"}\n\xff\n";
        let mut output = Vec::new();
        let result = translate(input, &mut output, &StreamOptions { strict: true });

        match result {
            Err(GortError::InvalidUtf8 { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected InvalidUtf8, got {other:?}"),
        }
    }

    /// Accepts `lines_left` complete lines, then fails like a closed pipe
    struct ClosedPipe {
        lines_left: usize,
        written: Vec<u8>,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.lines_left == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.lines_left -= buf.iter().filter(|&&b| b == b'\n').count();
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_output_stops_cleanly() {
        let input = r#"{"Action":"pass","Test":"TestA"}
{"Action":"fail","Test":"TestB"}
{"Action":"pass","Test":"TestC"}"#;
        let mut writer = ClosedPipe {
            lines_left: 1,
            written: Vec::new(),
        };

        let outcome = translate(input.as_bytes(), &mut writer, &StreamOptions::default())
            .expect("Closed output should not be an error");

        assert_eq!(outcome.lines, 2);
        assert!(!outcome.any_failed);
        assert_eq!(
            String::from_utf8(writer.written).expect("Output should be UTF-8"),
            "\x1b[32m✓ TestA\x1b[0m\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let (result, output) = run("", true);
        assert_eq!(result.expect("Should translate"), StreamOutcome::default());
        assert!(output.is_empty());
    }
}
