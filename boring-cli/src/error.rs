//! Error types emitted by the `boring` CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use boring_core::{CoordinateError, PlacesError};
use boring_places::ProviderBuildError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the `boring` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing <{name}> argument (pass it after the subcommand or set {env})")]
    MissingPositional {
        /// Value name shown in usage.
        name: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The latitude/longitude pair is not a valid coordinate.
    #[error("invalid location: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    /// The logger could not be installed.
    #[error("failed to initialise logging with '{spec}': {source}")]
    Logging {
        /// Log specification that was rejected.
        spec: String,
        /// Logger failure.
        #[source]
        source: flexi_logger::FlexiLoggerError,
    },
    /// Opening the places file failed.
    #[error("failed to open places file at {path:?}: {source}")]
    OpenPlacesFile {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Places JSON could not be decoded.
    #[error("failed to parse places JSON at {path:?}: {source}")]
    ParsePlacesFile {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the places provider failed.
    #[error("failed to build places provider for {base_url:?}: {source}")]
    BuildPlacesProvider {
        /// Configured service root.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The places lookup failed.
    #[error(transparent)]
    Places(#[from] PlacesError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
