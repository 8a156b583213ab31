//! `score` command: rate an area from a JSON file of places.

use std::io::{BufReader, Write};

use boring_core::{BoringnessEngine, Coordinate, RawPlace};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::{OutputFormat, write_report};
use crate::{
    ARG_FORMAT, ARG_LATITUDE, ARG_LONGITUDE, ARG_PLACES_PATH, CliError, ENV_SCORE_LATITUDE,
    ENV_SCORE_LONGITUDE, ENV_SCORE_PLACES_PATH, resolve_location,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a JSON array of places (name, types, rating, \
                 userRatingsTotal, location, address) against a user \
                 location without contacting the places service.",
    about = "Rate an area from a file of places"
)]
#[ortho_config(prefix = "BORING")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing an array of places.
    #[arg(value_name = ARG_PLACES_PATH)]
    #[serde(default)]
    pub(crate) places_path: Option<Utf8PathBuf>,
    /// Latitude of the user in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the user in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) places_path: Utf8PathBuf,
    pub(crate) location: Coordinate,
    pub(crate) format: OutputFormat,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let places_path = args.places_path.ok_or(CliError::MissingPositional {
            name: ARG_PLACES_PATH,
            env: ENV_SCORE_PLACES_PATH,
        })?;
        let location = resolve_location(
            args.latitude,
            args.longitude,
            ENV_SCORE_LATITUDE,
            ENV_SCORE_LONGITUDE,
        )?;
        Ok(Self {
            places_path,
            location,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let places = load_places(&config.places_path)?;
    let report = BoringnessEngine::new().assess(config.location, &places);
    info!(
        "scored {} of {} places from {}",
        report.total_landmarks,
        places.len(),
        config.places_path
    );
    write_report(writer, &report, config.format)
}

/// Load a JSON array of [`RawPlace`] values from disk.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<RawPlace>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenPlacesFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePlacesFile {
        path: path.to_path_buf(),
        source,
    })
}
