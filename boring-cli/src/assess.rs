//! `assess` command: rate the area around a coordinate using live places.

use std::io::Write;

use boring_core::{BoringnessEngine, Coordinate, DEFAULT_SEARCH_RADIUS_M, PlacesProvider};
use boring_places::{DEFAULT_PLACES_BASE_URL, HttpPlacesProvider, HttpPlacesProviderConfig};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::{OutputFormat, write_report};
use crate::{
    ARG_API_KEY, ARG_FORMAT, ARG_LATITUDE, ARG_LONGITUDE, ARG_PLACES_BASE_URL, ARG_RADIUS_M,
    CliError, ENV_ASSESS_API_KEY, ENV_ASSESS_LATITUDE, ENV_ASSESS_LONGITUDE, resolve_location,
};

/// CLI arguments for the `assess` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "assess",
    long_about = "Query the places service for bars, night clubs, casinos, \
                 liquor stores and places of worship around a coordinate, \
                 then score each place and the area as a whole. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rate the area around a coordinate"
)]
#[ortho_config(prefix = "BORING")]
pub(crate) struct AssessArgs {
    /// Latitude of the location in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the location in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Search radius in metres (default 5000).
    #[arg(long = ARG_RADIUS_M, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius_m: Option<u32>,
    /// Places service API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Override the places service root URL.
    #[arg(long = ARG_PLACES_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) places_base_url: Option<String>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl AssessArgs {
    pub(crate) fn into_config(self) -> Result<AssessConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssessConfig::try_from(merged)
    }
}

/// Resolved `assess` command configuration.
#[derive(Clone, PartialEq)]
pub(crate) struct AssessConfig {
    pub(crate) location: Coordinate,
    pub(crate) radius_m: u32,
    pub(crate) api_key: String,
    pub(crate) places_base_url: String,
    pub(crate) format: OutputFormat,
}

impl std::fmt::Debug for AssessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessConfig")
            .field("location", &self.location)
            .field("radius_m", &self.radius_m)
            .field("api_key", &"<redacted>")
            .field("places_base_url", &self.places_base_url)
            .field("format", &self.format)
            .finish()
    }
}

impl TryFrom<AssessArgs> for AssessConfig {
    type Error = CliError;

    fn try_from(args: AssessArgs) -> Result<Self, Self::Error> {
        let location = resolve_location(
            args.latitude,
            args.longitude,
            ENV_ASSESS_LATITUDE,
            ENV_ASSESS_LONGITUDE,
        )?;
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_API_KEY,
                env: ENV_ASSESS_API_KEY,
            })?;
        Ok(Self {
            location,
            radius_m: args.radius_m.unwrap_or(DEFAULT_SEARCH_RADIUS_M),
            api_key,
            places_base_url: args
                .places_base_url
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_owned()),
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds the places provider for the current `assess` invocation.
pub(crate) trait PlacesProviderBuilder {
    fn build(&self, config: &AssessConfig) -> Result<Box<dyn PlacesProvider>, CliError>;
}

pub(crate) struct DefaultPlacesProviderBuilder;

impl PlacesProviderBuilder for DefaultPlacesProviderBuilder {
    fn build(&self, config: &AssessConfig) -> Result<Box<dyn PlacesProvider>, CliError> {
        let provider_config = HttpPlacesProviderConfig::new(config.api_key.clone())
            .with_base_url(config.places_base_url.clone());
        let provider = HttpPlacesProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildPlacesProvider {
                base_url: config.places_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_assess_with(args, &DefaultPlacesProviderBuilder, &mut stdout)
}

pub(crate) fn run_assess_with(
    args: AssessArgs,
    builder: &dyn PlacesProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_assess(&config, builder, writer)
}

pub(crate) fn execute_assess(
    config: &AssessConfig,
    builder: &dyn PlacesProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let provider = builder.build(config)?;
    let engine = BoringnessEngine::new();
    let query = engine.query_for(config.location, config.radius_m);
    let report = engine.assess_nearby(provider.as_ref(), &query)?;
    info!(
        "assessed {} landmarks within {} m; area boring score {}",
        report.total_landmarks, config.radius_m, report.area_stats.total_boring_score
    );
    write_report(writer, &report, config.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AssessConfig, CliError> {
    let merged = AssessArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AssessConfig::try_from(merged)
}
