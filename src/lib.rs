//! Facade crate for the boringness engine.
//!
//! This crate re-exports the core scoring pipeline and exposes the HTTP
//! places provider behind the `http-places` feature.

#![forbid(unsafe_code)]

pub use boring_core::{
    AreaAggregator, AreaReport, AreaStats, BoringnessEngine, Category, CategoryFilter, Coordinate,
    CoordinateError, EngineConfig, NearbyQuery, PlacesError, PlacesProvider, RawPlace,
    ScoredPlace, Scorer, WeightedScorer, distance_km, rank,
};

#[cfg(feature = "http-places")]
pub use boring_places::{HttpPlacesProvider, HttpPlacesProviderConfig, ProviderBuildError};
