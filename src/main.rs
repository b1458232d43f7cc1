//! extman binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod events;
mod logic;
mod sources;
mod state;
mod store;
mod theme;
mod ui;
mod util;

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

struct ExtmanTimer;

impl tracing_subscriber::fmt::time::FormatTime for ExtmanTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        w.write_str(&crate::util::format_utc(secs))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();

    // Tracing logger writing to the state directory; stderr fallback keeps
    // startup alive when the log file cannot be opened.
    {
        let mut log_path = crate::theme::logs_dir();
        log_path.push("extman.log");
        let env_filter = || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.effective_log_level()))
        };
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(ExtmanTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(ExtmanTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!(fresh = cli.fresh, dry_run = cli.dry_run, "extman starting");
    if let Err(err) = app::run(cli).await {
        tracing::error!(error = ?err, "application error");
    }
    tracing::info!("extman exited");
}
