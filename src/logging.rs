// src/logging.rs

use flexi_logger::{FileSpec, Logger, LoggerHandle};

use crate::errors::{MirageError, MirageResult};

/// Starts file-backed logging. The terminal itself belongs to the dashboard,
/// so log lines go to `mirage.log` in the working directory.
pub fn init_logging(level: &str) -> MirageResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| MirageError::logging_error(format!("bad log level '{}': {}", level, e)))?
        .log_to_file(FileSpec::default().basename("mirage").suppress_timestamp())
        .start()
        .map_err(|e| MirageError::logging_error(format!("failed to start logger: {}", e)))
}
