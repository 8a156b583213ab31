//! Command-line interface for the boringness engine.
//!
//! `boring assess` looks up the places around a coordinate and prints the
//! area report. `boring score` runs the same pipeline over a JSON file of
//! places without contacting any service.
#![forbid(unsafe_code)]

use boring_core::Coordinate;
use clap::{Parser, Subcommand};

mod assess;
mod error;
mod logging;
mod output;
mod score;

pub use error::CliError;
pub use logging::DEFAULT_LOG_SPEC;
pub use output::OutputFormat;

use assess::AssessArgs;
use score::ScoreArgs;

const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_RADIUS_M: &str = "radius-m";
const ARG_API_KEY: &str = "api-key";
const ARG_PLACES_BASE_URL: &str = "places-base-url";
const ARG_FORMAT: &str = "format";
const ARG_PLACES_PATH: &str = "path";
const ENV_ASSESS_LATITUDE: &str = "BORING_CMDS_ASSESS_LATITUDE";
const ENV_ASSESS_LONGITUDE: &str = "BORING_CMDS_ASSESS_LONGITUDE";
const ENV_ASSESS_API_KEY: &str = "BORING_CMDS_ASSESS_API_KEY";
const ENV_SCORE_LATITUDE: &str = "BORING_CMDS_SCORE_LATITUDE";
const ENV_SCORE_LONGITUDE: &str = "BORING_CMDS_SCORE_LONGITUDE";
const ENV_SCORE_PLACES_PATH: &str = "BORING_CMDS_SCORE_PLACES_PATH";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the places lookup or
/// output fail.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let _logger = logging::init_logging(&cli.log_level)?;
    match cli.command {
        Command::Assess(args) => assess::run_assess(args),
        Command::Score(args) => score::run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "boring",
    about = "Rate how boring the area around a location is",
    version
)]
struct Cli {
    /// Log filter such as `info` or `boring_core=debug`. `RUST_LOG` wins.
    #[arg(long, global = true, value_name = "spec", default_value = DEFAULT_LOG_SPEC)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch nearby places from the places service and rate the area.
    Assess(AssessArgs),
    /// Rate the area using places read from a JSON file.
    Score(ScoreArgs),
}

/// Validate a merged latitude/longitude pair.
fn resolve_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    env_latitude: &'static str,
    env_longitude: &'static str,
) -> Result<Coordinate, CliError> {
    let lat = latitude.ok_or(CliError::MissingArgument {
        field: ARG_LATITUDE,
        env: env_latitude,
    })?;
    let lon = longitude.ok_or(CliError::MissingArgument {
        field: ARG_LONGITUDE,
        env: env_longitude,
    })?;
    Ok(Coordinate::new(lat, lon)?)
}

#[cfg(test)]
mod tests;
