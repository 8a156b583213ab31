//! Combine scored places into area-level statistics.

use crate::ScoredPlace;

/// Aggregate boring score reported when no place qualifies.
pub const EMPTY_AREA_BORING_SCORE: f64 = 100.0;

/// Summary of one area query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AreaStats {
    /// Area boringness, rounded to two decimals.
    ///
    /// Not clamped: enough interesting places drive it below zero.
    pub total_boring_score: f64,
    /// Number of scored places.
    pub num_places: usize,
    /// Mean of the per-place distances, each rounded to two decimals, then
    /// rounded to two decimals again.
    pub average_distance_km: f64,
}

impl AreaStats {
    /// Statistics for an area with no qualifying places.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_boring_score: EMPTY_AREA_BORING_SCORE,
            num_places: 0,
            average_distance_km: 0.0,
        }
    }
}

/// Normalisation applied by [`AreaAggregator`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AggregationConfig {
    /// Interest points that make an area maximally interesting.
    ///
    /// Summed per-place interest (`100 - boring_score`) is divided by this
    /// value; it does not depend on the number of places.
    pub interest_divisor: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            interest_divisor: 60.0,
        }
    }
}

/// Reduce a set of scored places to [`AreaStats`].
///
/// # Examples
/// ```
/// use boring_core::{AreaAggregator, AreaStats};
///
/// let stats = AreaAggregator::default().aggregate(&[]);
/// assert_eq!(stats, AreaStats::empty());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AreaAggregator {
    config: AggregationConfig,
}

impl AreaAggregator {
    /// Build an aggregator with explicit normalisation.
    #[must_use]
    pub const fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Compute area statistics over every scored place.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "area statistics are floating-point sums and means"
    )]
    #[must_use]
    pub fn aggregate(&self, scored: &[ScoredPlace]) -> AreaStats {
        if scored.is_empty() {
            return AreaStats::empty();
        }
        let interest_points: f64 = scored.iter().map(|place| 100.0 - place.boring_score).sum();
        let total_interest = interest_points / self.config.interest_divisor;
        let distance_sum: f64 = scored
            .iter()
            .map(|place| round_to_hundredths(place.distance_from_user_km))
            .sum();
        let count = scored.len();

        AreaStats {
            total_boring_score: round_to_hundredths(100.0 - total_interest),
            num_places: count,
            average_distance_km: round_to_hundredths(distance_sum / count as f64),
        }
    }
}

/// Round half-up to two decimal places.
///
/// Ties round towards positive infinity, so `-1.005` becomes `-1.0` rather
/// than `-1.01`.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred"
)]
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
