//! Stderr logging backend for the CLI.

use flexi_logger::{Logger, LoggerHandle};

use crate::CliError;

/// Log specification used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_SPEC: &str = "warn";

/// Install a stderr logger.
///
/// `RUST_LOG` takes precedence over `spec`. The returned handle must stay
/// alive for as long as log output is wanted.
pub(crate) fn init_logging(spec: &str) -> Result<LoggerHandle, CliError> {
    let logging_error = |source| CliError::Logging {
        spec: spec.to_owned(),
        source,
    };
    Logger::try_with_env_or_str(spec)
        .map_err(logging_error)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(logging_error)
}
