//! Logging setup
//!
//! Console output respects RUST_LOG (default `warn`):
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=vwatch::keymap=debug` - module-level filtering
//!
//! Debug logs go to `~/.config/vwatch/logs/vwatch.<date>.log` (daily rotation)
//! once `--debug` or `general.debug` is in effect. Until then the file layer is
//! a no-op and nothing is created on disk.

use std::path::Path;

use tracing::Level;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, writer::MakeWriterExt},
    layer::{Identity, SubscriberExt},
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type FileLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Handle for adjusting logging after startup
pub struct LogHandle {
    file_layer: reload::Handle<FileLayer, Registry>,
}

impl LogHandle {
    /// Start writing debug logs to the log file
    pub fn enable_debug(&self) {
        let layer = match crate::config_paths::ensure_logs_dir()
            .and_then(|dir| file_layer(&dir).map_err(|e| e.to_string()))
        {
            Ok(layer) => layer,
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                return;
            }
        };

        if let Err(e) = self.file_layer.reload(layer) {
            eprintln!("Warning: Could not enable debug logging: {}", e);
        }
    }
}

/// Debug-level file layer writing to a daily log in `logs_dir`
fn file_layer(logs_dir: &Path) -> Result<FileLayer, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("vwatch")
        .filename_suffix("log")
        .build(logs_dir)?;

    let layer = fmt::layer::<Registry>()
        .with_writer(appender.with_max_level(Level::DEBUG))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    Ok(Box::new(layer))
}

/// Initialize tracing subscriber with console logging and a dormant file layer
pub fn init() -> LogHandle {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    // File layer - swapped in by `enable_debug`
    let (file_layer, handle) = reload::Layer::new(Box::new(Identity::new()) as FileLayer);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    LogHandle { file_layer: handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layer_creates_log_in_given_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        file_layer(&logs).unwrap();

        let names: Vec<String> = std::fs::read_dir(&logs)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("vwatch."));
        assert!(names[0].ends_with(".log"));
    }
}
