//! Runtime configuration.
//!
//! Resolved once at start-up by clap: command-line flags win over the
//! `GUESSTERM_*` environment variables, which win over the defaults
//! (OS-seeded randomness, logging disabled).
//!
//! Nothing is read from or written to disk apart from the optional log file.

use std::path::PathBuf;

use clap::Parser;

pub const SEED_ENV: &str = "GUESSTERM_SEED";
pub const LOG_ENV: &str = "GUESSTERM_LOG";

/// Guess the secret number between 1 and 20 in at most 5 attempts
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "guessterm", version)]
pub struct Config {
    /// Use a reproducible sequence of targets
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log", value_name = "PATH", env = LOG_ENV)]
    pub log_file: Option<PathBuf>,
}
