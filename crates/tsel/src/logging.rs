//! Tracing setup.
//!
//! Two optional layers:
//!
//! - **stderr**: filtered by `RUST_LOG`, or by `-v` when it is unset
//!   (`warn`, `info`, `debug`, `trace`). Disabled in interactive mode, where
//!   stderr carries the screen.
//! - **file**: enabled by `--debug`, always at `debug` level. Written to
//!   `--log-file`, defaulting to `tsel.log` in the temp directory.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_NAME: &str = "tsel.log";

/// Logging switches taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Enables the debug log file.
    pub debug: bool,
    /// Overrides the debug log location.
    pub log_file: Option<PathBuf>,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// The screen is on stderr; no stderr logging.
    pub interactive: bool,
}

impl LogConfig {
    /// Level used for stderr when `RUST_LOG` is unset.
    pub fn stderr_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Where the debug log goes.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_NAME))
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &LogConfig) {
    let stderr_layer = (!config.interactive).then(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.stderr_level()));
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
    });

    let file_layer = if config.debug {
        match file_appender(&config.log_path()) {
            Ok(appender) => Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            ),
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        let mut config = LogConfig::default();
        assert_eq!(config.stderr_level(), "warn");
        config.verbosity = 1;
        assert_eq!(config.stderr_level(), "info");
        config.verbosity = 2;
        assert_eq!(config.stderr_level(), "debug");
        config.verbosity = 9;
        assert_eq!(config.stderr_level(), "trace");
    }

    #[test]
    fn log_path_defaults_to_temp_dir() {
        let config = LogConfig::default();
        assert_eq!(config.log_path(), std::env::temp_dir().join("tsel.log"));

        let config = LogConfig {
            log_file: Some(PathBuf::from("/var/tmp/custom.log")),
            ..LogConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/var/tmp/custom.log"));
    }

    #[test]
    fn file_appender_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        file_appender(&path).unwrap();
        assert!(path.exists());
    }
}
