//! HTTP places provider backed by the Google Places Nearby Search API.
//!
//! [`HttpPlacesProvider`] implements [`boring_core::PlacesProvider`], so the
//! engine can fetch the places around a user before scoring them.
//!
//! # Example
//!
//! ```no_run
//! use boring_core::{BoringnessEngine, Coordinate};
//! use boring_places::{HttpPlacesProvider, HttpPlacesProviderConfig};
//!
//! let config = HttpPlacesProviderConfig::new("my-api-key");
//! let provider = HttpPlacesProvider::with_config(config)?;
//! let engine = BoringnessEngine::new();
//! let query = engine.query_for(Coordinate::new(40.7128, -74.0060)?, 5_000);
//! let report = engine.assess_nearby(&provider, &query)?;
//! println!("area boring score: {}", report.area_stats.total_boring_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod google;
mod provider;

pub use provider::{
    DEFAULT_PLACES_BASE_URL, DEFAULT_USER_AGENT, HttpPlacesProvider, HttpPlacesProviderConfig,
    ProviderBuildError,
};
