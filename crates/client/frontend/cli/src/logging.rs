//! File-based logging for the terminal client.
//!
//! The TUI owns stdout/stderr while it runs, so logs go to a per-session file
//! under the platform cache directory instead:
//!
//! - macOS: `~/Library/Caches/dungeon/logs/<session>/client.log`
//! - Linux: `~/.cache/dungeon/logs/<session>/client.log` (or `$XDG_CACHE_HOME`)
//! - Windows: `%LOCALAPPDATA%\dungeon\cache\logs\<session>\client.log`
//! - Fallback: `/tmp/dungeon/logs/<session>/client.log`
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Get the platform-specific log directory for the dungeon client.
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"));

    base_dir.join("logs")
}

/// Session name used when none is configured: `session_<unix seconds>`.
pub fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

/// Setup logging to a session-specific file.
///
/// Filtering follows `RUST_LOG`, defaulting to INFO. Returns the path of the
/// log file.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Only the file layer: the terminal belongs to the TUI.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}
