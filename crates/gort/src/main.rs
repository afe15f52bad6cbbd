// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gort: condensed, colorized output for `go test -json`
//!
//! Reads the JSON event stream of Go's test runner, from stdin, a file, or a
//! `go test` child process, and prints one line per passed or failed test.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use gort::config::{Command, Config};
use gort::runner::run_go_test;
use gort::stream::{StreamOptions, translate};

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the rendered results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;

    let options = StreamOptions {
        strict: config.strict,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Some(command) => {
            let Command::Run { go, .. } = command;
            let outcome = run_go_test(go, &command.go_test_args(), &mut out, &options)?;
            Ok(ExitCode::from(outcome.exit_code()))
        }
        None => {
            let reader: Box<dyn BufRead> = match &config.input {
                Some(path) => {
                    debug!(path = %path.display(), "Reading test output from file");
                    let file = File::open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    Box::new(BufReader::new(file))
                }
                None => {
                    debug!("Reading test output from stdin");
                    Box::new(io::stdin().lock())
                }
            };

            let outcome = translate(reader, &mut out, &options)?;
            if outcome.any_failed {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
