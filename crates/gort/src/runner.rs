// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Running `go test -json` as a child process
//!
//! The child's stdout is streamed through [`translate`] while it runs; its
//! stderr is inherited so build errors reach the terminal unchanged.

use std::io::{self, BufReader, Write};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::GortError;
use crate::stream::{StreamOptions, StreamOutcome, translate};

/// Result of a `go test` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// What the translation loop saw
    pub stream: StreamOutcome,
    /// Exit code of the child, `None` if it was terminated by a signal
    pub status_code: Option<i32>,
}

impl RunOutcome {
    /// Exit code to report for this run
    ///
    /// The child's own code when it fits, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.status_code
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(1)
    }
}

/// Run `program` with `args` and translate its stdout into `writer`
///
/// In strict mode a malformed line stops the run: the child is killed and
/// reaped before the error is returned.
///
/// # Errors
///
/// Returns `GortError::Spawn` if the program cannot be started, and any error
/// from [`translate`].
pub fn run_go_test<W>(
    program: &str,
    args: &[String],
    writer: &mut W,
    options: &StreamOptions,
) -> Result<RunOutcome, GortError>
where
    W: Write + ?Sized,
{
    debug!(program, ?args, "Starting test run");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| GortError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let Some(stdout) = child.stdout.take() else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(io::Error::other("child stdout was not captured").into());
    };

    let stream = match translate(BufReader::new(stdout), writer, options) {
        Ok(stream) => stream,
        Err(e) => {
            warn!(error = %e, "Stopping test run");
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
    };

    let status = child.wait()?;
    if !status.success() {
        info!(%status, "go test exited unsuccessfully");
    }

    Ok(RunOutcome {
        stream,
        status_code: status.code(),
    })
}
