use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "k8s-platform";
const MAX_LOG_FILES: usize = 7;

/// Installs the global subscriber: `RUST_LOG` filter (default `info`), console
/// output, and daily-rolled files under `log_dir` when one is given.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let console = fmt::layer().with_target(true);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = rolling::Builder::new()
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .rotation(rolling::Rotation::DAILY)
                .max_log_files(MAX_LOG_FILES)
                .build(dir)
                .with_context(|| format!("failed to open log directory {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
