//! The end-to-end boringness pipeline.
//!
//! [`BoringnessEngine`] runs filter → score → aggregate → rank over the
//! places around one user location. Each call builds fresh values and shares
//! no mutable state, so a single engine can serve concurrent requests.

use log::debug;

use crate::{
    AggregationConfig, AreaAggregator, AreaStats, CategoryFilter, Coordinate, NearbyQuery,
    PlacesError, PlacesProvider, RawPlace, ScoreWeightsError, ScoredPlace, Scorer, ScoringConfig,
    WeightedScorer, rank,
};

/// Tunables for every pipeline stage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    /// Category allow-list.
    pub filter: CategoryFilter,
    /// Scorer weights and limits.
    pub scoring: ScoringConfig,
    /// Area normalisation.
    pub aggregation: AggregationConfig,
}

/// Result of assessing one location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AreaReport {
    /// The assessed location.
    pub user_location: Coordinate,
    /// Scored places, most interesting first.
    pub landmarks: Vec<ScoredPlace>,
    /// Number of entries in `landmarks`.
    pub total_landmarks: usize,
    /// Area-level statistics over `landmarks`.
    pub area_stats: AreaStats,
}

/// Score the places around a location and summarise the area.
///
/// # Examples
/// ```
/// use boring_core::{BoringnessEngine, Coordinate, RawPlace};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let user = Coordinate::new(0.0, 0.0)?;
/// let places = vec![
///     RawPlace::new("Chapel", user).with_types(["place_of_worship"]),
///     RawPlace::new("Gym", user).with_types(["gym"]),
/// ];
/// let report = BoringnessEngine::new().assess(user, &places);
/// assert_eq!(report.total_landmarks, 1);
/// assert_eq!(report.area_stats.num_places, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoringnessEngine<S = WeightedScorer> {
    filter: CategoryFilter,
    scorer: S,
    aggregator: AreaAggregator,
}

impl BoringnessEngine<WeightedScorer> {
    /// Build the pipeline with the default allow-list, weights and divisor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scorer(
            CategoryFilter::default(),
            WeightedScorer::default(),
            AreaAggregator::default(),
        )
    }

    /// Build the default pipeline from `config`.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the scoring weights are invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self, ScoreWeightsError> {
        let scorer = WeightedScorer::new(config.scoring)?;
        Ok(Self::with_scorer(
            config.filter,
            scorer,
            AreaAggregator::new(config.aggregation),
        ))
    }
}

impl Default for BoringnessEngine<WeightedScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> BoringnessEngine<S> {
    /// Assemble a pipeline from explicit stages.
    #[must_use]
    pub const fn with_scorer(filter: CategoryFilter, scorer: S, aggregator: AreaAggregator) -> Self {
        Self {
            filter,
            scorer,
            aggregator,
        }
    }

    /// The category allow-list in use.
    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Filter and score `places`, keeping provider order.
    #[must_use]
    pub fn score_all(&self, user: Coordinate, places: &[RawPlace]) -> Vec<ScoredPlace> {
        let candidates = self.filter.filter(places);
        debug!(
            "{} of {} places matched the category allow-list",
            candidates.len(),
            places.len()
        );
        candidates
            .iter()
            .map(|candidate| self.scorer.score(candidate, user))
            .collect()
    }

    /// Run the full pipeline over `places`.
    ///
    /// Area statistics cover every allow-listed place, including those
    /// beyond the scoring radius.
    #[must_use]
    pub fn assess(&self, user: Coordinate, places: &[RawPlace]) -> AreaReport {
        let scored = self.score_all(user, places);
        let area_stats = self.aggregator.aggregate(&scored);
        let landmarks = rank(scored);
        debug!(
            "area at ({}, {}) scored {} across {} landmarks",
            user.latitude(),
            user.longitude(),
            area_stats.total_boring_score,
            landmarks.len()
        );
        AreaReport {
            user_location: user,
            total_landmarks: landmarks.len(),
            landmarks,
            area_stats,
        }
    }

    /// Build a provider query for `user` covering the allow-listed categories.
    #[must_use]
    pub fn query_for(&self, user: Coordinate, radius_m: u32) -> NearbyQuery {
        NearbyQuery::new(user)
            .with_radius_m(radius_m)
            .with_categories(self.filter.allowed().iter().copied())
    }

    /// Fetch places from `provider` and assess them.
    ///
    /// # Errors
    /// Propagates [`PlacesError`] from the provider unchanged. The engine does
    /// not retry.
    pub fn assess_nearby<P>(&self, provider: &P, query: &NearbyQuery) -> Result<AreaReport, PlacesError>
    where
        P: PlacesProvider + ?Sized,
    {
        let places = provider.nearby_places(query)?;
        Ok(self.assess(query.location, &places))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubPlacesProvider, place_at_offset_km};
    use crate::{Category, ScoreWeights};
    use rstest::{fixture, rstest};

    #[fixture]
    fn user() -> Coordinate {
        Coordinate::new(51.5, -0.12).expect("valid coordinate")
    }

    #[rstest]
    fn assess_ranks_and_aggregates(user: Coordinate) {
        let places = vec![
            place_at_offset_km("Far chapel", user, 8.0, &["place_of_worship"]),
            place_at_offset_km("Near bar", user, 0.5, &["bar"]).with_rating(4.5),
            place_at_offset_km("Gym", user, 0.1, &["gym"]),
        ];
        let report = BoringnessEngine::new().assess(user, &places);

        assert_eq!(report.user_location, user);
        assert_eq!(report.total_landmarks, 2);
        assert_eq!(report.area_stats.num_places, 2);
        assert_eq!(report.landmarks[0].name, "Near bar");
        assert_eq!(report.landmarks[1].name, "Far chapel");
    }

    #[rstest]
    fn no_qualifying_places_yield_empty_stats(user: Coordinate) {
        let places = vec![place_at_offset_km("Gym", user, 0.1, &["gym"])];
        let report = BoringnessEngine::new().assess(user, &places);
        assert!(report.landmarks.is_empty());
        assert_eq!(report.area_stats, AreaStats::empty());
    }

    #[rstest]
    fn with_config_rejects_bad_weights() {
        let config = EngineConfig {
            scoring: ScoringConfig {
                weights: ScoreWeights {
                    distance: 1.0,
                    rating: 1.0,
                    rating_count: 1.0,
                },
                ..ScoringConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(BoringnessEngine::with_config(config).is_err());
    }

    #[rstest]
    fn query_carries_allow_list(user: Coordinate) {
        let engine = BoringnessEngine::with_config(EngineConfig {
            filter: CategoryFilter::new([Category::Casino]),
            ..EngineConfig::default()
        })
        .expect("default weights are valid");
        let query = engine.query_for(user, 1_500);
        assert_eq!(query.radius_m, 1_500);
        assert_eq!(query.categories, vec![Category::Casino]);
    }

    #[rstest]
    fn assess_nearby_propagates_provider_errors(user: Coordinate) {
        let provider = StubPlacesProvider::with_error(PlacesError::RequestDenied {
            message: "bad key".to_owned(),
        });
        let engine = BoringnessEngine::new();
        let err = engine
            .assess_nearby(&provider, &engine.query_for(user, 5_000))
            .expect_err("provider failure should surface");
        assert!(matches!(err, PlacesError::RequestDenied { .. }));
    }
}
