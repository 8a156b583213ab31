//! Score allow-listed places for a user location.
//!
//! The [`Scorer`] trait turns a [`Candidate`] into a [`ScoredPlace`].
//! [`WeightedScorer`] blends proximity, rating and rating volume using the
//! weights and limits held in [`ScoringConfig`].

use thiserror::Error;

use crate::{Candidate, Coordinate, PlaceSignals, ScoreDetails, ScoredPlace, distance_km};

/// Tolerance used when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Calculate the interest of a candidate place for a user.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// requests can share a scorer. Scoring is infallible and pure: missing data
/// lowers the score instead of producing an error.
///
/// Implementations must:
/// - Produce a finite `interest_score` in `0.0..=1.0`.
/// - Set `boring_score` to `(1 - interest_score) * 100`.
/// - Copy `candidate.categories` onto the result unchanged.
///
/// Use [`Scorer::sanitise`] to apply the range guard.
pub trait Scorer: Send + Sync {
    /// Score `candidate` relative to `user`.
    fn score(&self, candidate: &Candidate<'_>, user: Coordinate) -> ScoredPlace;

    /// Clamp and validate a raw interest value.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Relative weighting of the three interest components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the proximity component.
    pub distance: f64,
    /// Weight of the rating component.
    pub rating: f64,
    /// Weight of the rating-volume component.
    pub rating_count: f64,
}

/// Errors raised by [`ScoreWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weights must be finite")]
    NonFinite,
    /// A weight was below zero.
    #[error("score weights must not be negative")]
    Negative,
    /// The weights did not add up to one.
    #[error("score weights must sum to 1.0, found {0}")]
    BadTotal(f64),
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 0.4,
            rating: 0.4,
            rating_count: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is non-finite or negative,
    /// or when the weights do not sum to `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights"
    )]
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        let parts = [self.distance, self.rating, self.rating_count];
        if parts.iter().any(|weight| !weight.is_finite()) {
            return Err(ScoreWeightsError::NonFinite);
        }
        if parts.iter().any(|weight| *weight < 0.0) {
            return Err(ScoreWeightsError::Negative);
        }
        let total: f64 = parts.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreWeightsError::BadTotal(total));
        }
        Ok(self)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "interest is a weighted sum of components"
    )]
    fn blend(self, details: ScoreDetails) -> f64 {
        self.distance * details.distance_component
            + self.rating * details.rating_component
            + self.rating_count * details.rating_count_component
    }
}

/// Limits and weights used by [`WeightedScorer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Component weights.
    pub weights: ScoreWeights,
    /// Distance at which the proximity component reaches zero, in kilometres.
    pub radius_km: f64,
    /// Highest rating a provider can report.
    pub max_rating: f64,
    /// Rating count at which the volume component saturates.
    pub rating_count_saturation: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            radius_km: 10.0,
            max_rating: 5.0,
            rating_count_saturation: 100,
        }
    }
}

/// Default [`Scorer`] combining proximity, rating and rating volume.
///
/// # Examples
/// ```
/// use boring_core::{CategoryFilter, Coordinate, RawPlace, Scorer, WeightedScorer};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let user = Coordinate::new(0.0, 0.0)?;
/// let places = vec![
///     RawPlace::new("Jazz Bar", user)
///         .with_types(["bar"])
///         .with_rating(5.0)
///         .with_user_ratings_total(200),
/// ];
/// let candidates = CategoryFilter::default().filter(&places);
/// let scored = WeightedScorer::default().score(&candidates[0], user);
/// assert_eq!(scored.interest_score, 1.0);
/// assert_eq!(scored.boring_score, 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WeightedScorer {
    config: ScoringConfig,
}

impl WeightedScorer {
    /// Build a scorer after validating `config.weights`.
    ///
    /// # Errors
    /// Propagates [`ScoreWeightsError`] from [`ScoreWeights::validate`].
    pub fn new(config: ScoringConfig) -> Result<Self, ScoreWeightsError> {
        config.weights.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "components are ratios of bounded measurements"
    )]
    fn components(&self, distance: f64, signals: PlaceSignals) -> ScoreDetails {
        let ScoringConfig {
            radius_km,
            max_rating,
            rating_count_saturation,
            ..
        } = self.config;
        let distance_component = if radius_km > 0.0 {
            (1.0 - distance / radius_km).max(0.0)
        } else {
            0.0
        };
        let rating_component = if max_rating > 0.0 {
            signals.rating / max_rating
        } else {
            0.0
        };
        let rating_count_component = if rating_count_saturation == 0 {
            1.0
        } else {
            (f64::from(signals.rating_count) / f64::from(rating_count_saturation)).min(1.0)
        };
        ScoreDetails {
            distance_component,
            rating_component,
            rating_count_component,
        }
    }
}

impl Scorer for WeightedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "boring score is the scaled complement of interest"
    )]
    fn score(&self, candidate: &Candidate<'_>, user: Coordinate) -> ScoredPlace {
        let place = candidate.place;
        let distance = distance_km(user, place.location);
        let signals = PlaceSignals::from_place(place, self.config.max_rating);
        let details = self.components(distance, signals);
        let interest_score = Self::sanitise(self.config.weights.blend(details));

        ScoredPlace {
            name: place.name.clone(),
            address: place.address.clone(),
            categories: candidate.categories.clone(),
            location: place.location,
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
            distance_from_user_km: distance,
            within_radius: distance <= self.config.radius_km,
            interest_score,
            boring_score: (1.0 - interest_score) * 100.0,
            score_details: details,
        }
    }
}
