//! Command-line argument definition.

use clap::Parser;

/// extman - a fast, friendly TUI for browsing and managing extension records
#[derive(Parser, Debug)]
#[command(name = "extman")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing and managing extension records", long_about = None)]
pub struct Args {
    /// Ignore the persisted collection and re-seed from the seed resource
    #[arg(long)]
    pub fresh: bool,

    /// Seed resource locator: a file path or an http(s) URL (default: data.json)
    #[arg(long)]
    pub seed: Option<String>,

    /// Start with the given theme (light or dark) and persist it
    #[arg(long)]
    pub theme: Option<String>,

    /// Start with the given filter (all, active, or inactive)
    #[arg(long)]
    pub filter: Option<String>,

    /// Keep mutations in memory without writing them to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Effective log level after applying `--verbose`.
    pub fn effective_log_level(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }
}
