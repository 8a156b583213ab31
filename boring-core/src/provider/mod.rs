//! Fetch nearby places from an external lookup service.
//!
//! The `PlacesProvider` trait abstracts the places lookup collaborator.
//! Callers supply a [`NearbyQuery`] and receive the raw places around it in
//! the service's response order.
//!
//! Lookup failures surface as [`PlacesError`]; the engine propagates them
//! without retrying.

mod error;
mod places;

pub use error::PlacesError;
pub use places::{DEFAULT_SEARCH_RADIUS_M, NearbyQuery, PlacesProvider};
