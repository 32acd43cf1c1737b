//! Logging bootstrap.
//!
//! # Invariants
//! - File logging is initialized at most once per process.
//! - A second call with the same settings is a no-op; conflicting settings
//!   are rejected with an error, never applied.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const ROTATE_AT_BYTES: u64 = 8 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 4;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    settings: LogSettings,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

impl LogSettings {
    /// Validates raw level and directory strings.
    fn parse(level: &str, dir: &str) -> Result<Self, String> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => {
                return Err(format!(
                    "unsupported log level `{other}`; expected trace|debug|info|warn|error"
                ))
            }
        };

        let dir = dir.trim();
        if dir.is_empty() {
            return Err("log directory cannot be empty".to_string());
        }
        let dir = Path::new(dir);
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be an absolute path, got `{}`",
                dir.display()
            ));
        }

        Ok(Self {
            level,
            dir: dir.to_path_buf(),
        })
    }
}

/// Starts rolling file logging at `level` under `log_dir`.
///
/// # Errors
/// - Returns an error when `level` is unsupported, when `log_dir` is empty,
///   relative, or cannot be created, or when logging was already initialized
///   with different settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let settings = LogSettings::parse(level, log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start_file_logger(settings.clone()))?;
    if active.settings != settings {
        return Err(format!(
            "logging already initialized with level `{}` at `{}`",
            active.settings.level,
            active.settings.dir.display()
        ));
    }
    Ok(())
}

fn start_file_logger(settings: LogSettings) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            settings.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(&settings.dir)
                .basename("daydash"),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=core status=ok level={} log_dir={} version={}",
        settings.level,
        settings.dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        settings,
        _handle: handle,
    })
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level, active.settings.dir.clone()))
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::LogSettings;
    use std::path::PathBuf;

    #[test]
    fn parse_normalizes_the_level() {
        assert_eq!(LogSettings::parse("INFO", "/tmp/daydash").unwrap().level, "info");
        assert_eq!(
            LogSettings::parse(" warning ", "/tmp/daydash").unwrap().level,
            "warn"
        );
        assert!(LogSettings::parse("verbose", "/tmp/daydash").is_err());
    }

    #[test]
    fn parse_rejects_bad_directories() {
        assert!(LogSettings::parse("info", "").is_err());
        let error = LogSettings::parse("info", "logs/dev").unwrap_err();
        assert!(error.contains("absolute"));
    }

    #[test]
    fn parse_trims_the_directory() {
        let settings = LogSettings::parse("info", " /var/log/daydash ").unwrap();
        assert_eq!(settings.dir, PathBuf::from("/var/log/daydash"));
    }
}
