// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the gort binary
//!
//! This module provides the command line interface: where the `go test -json`
//! stream comes from, how malformed lines are handled, and logging options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Go binary used by `gort run` when none is configured
pub const DEFAULT_GO: &str = "go";

/// Package pattern tested by `gort run` when no arguments are given
pub const DEFAULT_PACKAGES: &str = "./...";

/// gort - condensed, colorized output for `go test -json`
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gort")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to translating stdin)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read `go test -json` output from this file instead of stdin
    #[arg(short, long, env = "GORT_INPUT")]
    pub input: Option<PathBuf>,

    /// Abort on the first line that is not a valid test event
    ///
    /// By default malformed lines are logged as warnings and skipped.
    #[arg(long, env = "GORT_STRICT", default_value = "false", global = true)]
    pub strict: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the rendered
    /// test results on stdout.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run `go test -json` and render its output
    ///
    /// Everything after the subcommand is passed to `go test`.
    ///
    /// Example:
    ///   gort run ./... -count=1
    Run {
        /// Go binary to invoke
        #[arg(long, env = "GORT_GO", default_value = DEFAULT_GO)]
        go: String,

        /// Arguments passed to `go test` (defaults to `./...`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Command {
    /// Arguments for `go test`, with `-json` first and `./...` when none were given
    #[must_use]
    pub fn go_test_args(&self) -> Vec<String> {
        match self {
            Self::Run { args, .. } => {
                let mut go_args = vec!["test".to_string(), "-json".to_string()];
                if args.is_empty() {
                    go_args.push(DEFAULT_PACKAGES.to_string());
                } else {
                    go_args.extend(args.iter().cloned());
                }
                go_args
            }
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an input file is configured but does not exist or
    /// is not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }

        if self.input.is_some() && self.command.is_some() {
            return Err(ConfigError::InputWithRun);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// `--input` combined with `run`
    #[error("--input cannot be combined with the run subcommand")]
    InputWithRun,
}
