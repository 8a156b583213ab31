//! Render area reports for the terminal.
//!
//! JSON output mirrors the HTTP response of the web app: per-place boring
//! scores rounded to one decimal and distances to two. Text output prints a
//! verdict line followed by the ranked landmarks.

use std::io::Write;

use boring_core::{
    AreaReport, AreaStats, Category, Coordinate, ScoreDetails, ScoredPlace, round_to_hundredths,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Aggregate score above which an area reads as dull.
const DULL_THRESHOLD: f64 = 50.0;
/// Aggregate score above which an area reads as middling.
const SO_SO_THRESHOLD: f64 = 29.0;

/// How a report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Human-readable summary.
    Text,
}

/// Verdict label for an aggregate boring score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Dull,
    SoSo,
    Lively,
}

impl Verdict {
    pub(crate) fn for_score(total_boring_score: f64) -> Self {
        if total_boring_score > DULL_THRESHOLD {
            Self::Dull
        } else if total_boring_score > SO_SO_THRESHOLD {
            Self::SoSo
        } else {
            Self::Lively
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Dull => "dull",
            Self::SoSo => "so-so",
            Self::Lively => "lively",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportView<'a> {
    user_location: Coordinate,
    landmarks: Vec<LandmarkView<'a>>,
    total_landmarks: usize,
    area_stats: AreaStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LandmarkView<'a> {
    name: &'a str,
    address: &'a str,
    categories: &'a [Category],
    location: Coordinate,
    boring_score: f64,
    interest_score: f64,
    distance_from_user_km: f64,
    within_radius: bool,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    score_details: ScoreDetails,
}

impl<'a> From<&'a ScoredPlace> for LandmarkView<'a> {
    fn from(place: &'a ScoredPlace) -> Self {
        Self {
            name: &place.name,
            address: &place.address,
            categories: &place.categories,
            location: place.location,
            boring_score: round_to_tenths(place.boring_score),
            interest_score: place.interest_score,
            distance_from_user_km: round_to_hundredths(place.distance_from_user_km),
            within_radius: place.within_radius,
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
            score_details: place.score_details,
        }
    }
}

impl<'a> From<&'a AreaReport> for ReportView<'a> {
    fn from(report: &'a AreaReport) -> Self {
        Self {
            user_location: report.user_location,
            landmarks: report.landmarks.iter().map(LandmarkView::from).collect(),
            total_landmarks: report.total_landmarks,
            area_stats: report.area_stats,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "display rounding scales by ten"
)]
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Write `report` to `writer` in `format`.
pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &AreaReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&ReportView::from(report))
                .map_err(CliError::SerialiseReport)?
        }
        OutputFormat::Text => render_text(report),
    };
    writer
        .write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn render_text(report: &AreaReport) -> String {
    let stats = report.area_stats;
    let mut lines = vec![format!(
        "Area at ({}, {}) is {}: boring score {:.2} across {} places, average distance {:.2} km",
        report.user_location.latitude(),
        report.user_location.longitude(),
        Verdict::for_score(stats.total_boring_score).as_str(),
        stats.total_boring_score,
        stats.num_places,
        stats.average_distance_km,
    )];
    lines.extend(report.landmarks.iter().enumerate().map(|(index, place)| {
        let view = LandmarkView::from(place);
        let categories: Vec<&str> = place.categories.iter().map(|c| c.as_str()).collect();
        format!(
            "{:>3}. {} [{}] boring {:.1}, {:.2} km{}",
            index + 1,
            view.name,
            categories.join(", "),
            view.boring_score,
            view.distance_from_user_km,
            if view.within_radius { "" } else { " (outside radius)" },
        )
    }));
    lines.join("\n")
}
