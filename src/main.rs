//! issue-facets binary entrypoint kept minimal. The runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use issue_facets::{app, args::Args, theme, util};

/// Log line timestamps in UTC.
struct LogTimer;

impl tracing_subscriber::fmt::time::FormatTime for LogTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        w.write_str(&util::utc_timestamp(secs))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `default_filter`: Filter used when `RUST_LOG` is not set
///
/// Details:
/// - Logs go to `<config>/logs/issue-facets.log` so they never draw over the TUI;
///   stderr is used only when the file cannot be opened.
fn init_logging(default_filter: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("issue-facets.log");
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
                .with_timer(LogTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LogTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_filter());

    tracing::info!(data = %args.data.display(), "issue-facets starting");
    if let Err(err) = app::run(&args.run_options()) {
        tracing::error!(error = %err, "Application error");
        eprintln!("issue-facets: {err}");
        std::process::exit(1);
    }
    tracing::info!("issue-facets exited");
}
