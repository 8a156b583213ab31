//! Core domain types and scoring pipeline for the boringness engine.
//!
//! Given a user location and the places a lookup service reports around it,
//! the engine keeps the places in a small set of nightlife and worship
//! categories, scores each one for interest, and summarises the area as a
//! single boringness figure where higher means duller.
//!
//! The pipeline stages are usable on their own:
//! - [`CategoryFilter`] keeps allow-listed places.
//! - [`Scorer`] (default [`WeightedScorer`]) rates a place for a user.
//! - [`AreaAggregator`] reduces scored places to [`AreaStats`].
//! - [`rank`] orders places from most to least interesting.
//!
//! [`BoringnessEngine`] chains them, optionally fetching places through a
//! [`PlacesProvider`].
//!
//! # Examples
//!
//! ```
//! use boring_core::{BoringnessEngine, Coordinate, RawPlace};
//!
//! # fn main() -> Result<(), boring_core::CoordinateError> {
//! let user = Coordinate::new(40.7128, -74.0060)?;
//! let places = vec![
//!     RawPlace::new("Jazz Bar", Coordinate::new(40.7138, -74.0060)?)
//!         .with_types(["bar"])
//!         .with_rating(4.6)
//!         .with_user_ratings_total(320),
//! ];
//! let report = BoringnessEngine::new().assess(user, &places);
//! assert_eq!(report.total_landmarks, 1);
//! assert!(report.area_stats.total_boring_score < 100.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod category;
mod coordinate;
mod distance;
mod engine;
mod filter;
mod place;
mod provider;
mod rank;
mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use aggregate::{
    AggregationConfig, AreaAggregator, AreaStats, EMPTY_AREA_BORING_SCORE, round_to_hundredths,
};
pub use category::Category;
pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use engine::{AreaReport, BoringnessEngine, EngineConfig};
pub use filter::{Candidate, CategoryFilter};
pub use place::{PlaceSignals, RawPlace, ScoreDetails, ScoredPlace};
pub use provider::{DEFAULT_SEARCH_RADIUS_M, NearbyQuery, PlacesError, PlacesProvider};
pub use rank::rank;
pub use scorer::{ScoreWeights, ScoreWeightsError, Scorer, ScoringConfig, WeightedScorer};
