//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, writing each record to a file and the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Backend installed by [`Logger::init_global_logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBackend {
    /// Records go to the log file and stderr
    File,
    /// The log file could not be opened; `env_logger` writes to stderr
    Stderr,
    /// Another logger was already installed and was left in place
    Unchanged,
}

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that gets recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Creates a logger that only writes to the console
    pub fn console(level: LevelFilter) -> Self {
        Logger {
            file: Mutex::new(None),
            level,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the outcome of a single string operation
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the operation
    /// * `inputs` - Debug rendering of the inputs
    /// * `outcome` - Rendering of the result
    pub fn log_operation(&self, operation: &str, inputs: &str, outcome: &str) -> io::Result<()> {
        self.log(&format!("{}({}) -> {}", operation, inputs, outcome))
    }

    /// Install a logger as the global `log` backend
    ///
    /// Falls back to `env_logger` (honouring `RUST_LOG`) when the log file
    /// cannot be created.
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> LogBackend {
        let backend = match Logger::new(log_file, level) {
            Ok(global_logger) => match log::set_boxed_logger(Box::new(global_logger)) {
                Ok(()) => LogBackend::File,
                Err(_) => LogBackend::Unchanged,
            },
            Err(e) => {
                eprintln!("Warning: cannot open {}: {}; logging to stderr only", log_file, e);
                let installed = env_logger::Builder::new()
                    .filter_level(level)
                    .parse_default_env()
                    .try_init();
                match installed {
                    Ok(()) => LogBackend::Stderr,
                    Err(_) => LogBackend::Unchanged,
                }
            }
        };

        if backend == LogBackend::Unchanged {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        backend
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to stderr so stdout carries only results
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global logger can only be installed once per process, so this is
    // the only test in the crate that calls init_global_logger.
    #[test]
    fn test_global_logger_falls_back_to_stderr() {
        let backend = Logger::init_global_logger("/nonexistent/strkit/global.log", LevelFilter::Debug);
        assert_eq!(backend, LogBackend::Stderr);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::debug!("stderr fallback active");

        let again = Logger::init_global_logger("/nonexistent/strkit/global.log", LevelFilter::Info);
        assert_eq!(again, LogBackend::Unchanged);
    }

    #[test]
    fn test_log_operation_writes_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.log");
        let logger = Logger::new(path.to_str().unwrap(), LevelFilter::Info).unwrap();

        logger.log_operation("ends_with", "\"a.gz\", \".gz\"", "true").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "ends_with(\"a.gz\", \".gz\") -> true\n");
    }

    #[test]
    fn test_console_logger_respects_level() {
        let logger = Logger::console(LevelFilter::Info);
        let debug = log::MetadataBuilder::new().level(log::Level::Debug).build();
        let warn = log::MetadataBuilder::new().level(log::Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
        assert!(logger.log("ignored without a file").is_ok());
    }
}
