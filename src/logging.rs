use std::path::Path;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Builds the log filter from `RUST_LOG`, falling back to a default level
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("cardboard=debug,tower_http=debug,info")
        } else {
            EnvFilter::new("cardboard=info,warn")
        }
    })
}

/// Initialize the logging system
///
/// Human-readable logs always go to stdout. When `log_dir` is given, JSON logs
/// are also written to a daily rotating `cardboard.*.log` in that directory.
///
/// ### Arguments
///
/// * `debug` - Whether to default to debug-level logging for this crate
/// * `log_dir` - Optional directory for the JSON log files
///
/// ### Errors
///
/// Returns an error if the log directory cannot be created or written to
pub fn init_logging(debug: bool, log_dir: Option<&Path>) -> Result<(), InitError> {
    let stdout_layer = fmt::layer().with_target(debug).with_line_number(debug);

    let file_layer = match log_dir {
        Some(dir) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("cardboard")
                .filename_suffix("log")
                .build(dir)?;
            Some(fmt::layer().json().with_writer(file_appender))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_rejects_unusable_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("not-a-dir");
        std::fs::write(&file_path, b"").unwrap();

        // A regular file cannot hold the log files
        let result = init_logging(false, Some(&file_path));

        assert!(result.is_err());
    }
}
