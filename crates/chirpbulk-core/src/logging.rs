//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "CHIRPBULK_LOG";

/// Filter used when `CHIRPBULK_LOG` is unset; targets are crate paths
const DEFAULT_FILTER: &str =
    "chirpbulk=info,chirpbulk_core=info,chirpbulk_api=info,chirpbulk_app=info,chirpbulk_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/chirpbulk/logs/` because the TUI owns
/// stdout. Log level is controlled by the `CHIRPBULK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CHIRPBULK_LOG=debug chirpbulk
/// CHIRPBULK_LOG=chirpbulk_app=trace chirpbulk
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "chirpbulk.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Directory holding the daily `chirpbulk.log.YYYY-MM-DD` files
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("chirpbulk").join("logs")
}
