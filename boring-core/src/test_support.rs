//! Test-only helpers: a canned `PlacesProvider` and place builders.

use crate::{Coordinate, EARTH_RADIUS_KM, NearbyQuery, PlacesError, PlacesProvider, RawPlace};

/// `PlacesProvider` returning a fixed result regardless of the query.
#[derive(Debug, Clone)]
pub struct StubPlacesProvider {
    response: Result<Vec<RawPlace>, PlacesError>,
}

impl StubPlacesProvider {
    /// Provider answering every query with `places`.
    #[must_use]
    pub const fn with_places(places: Vec<RawPlace>) -> Self {
        Self {
            response: Ok(places),
        }
    }

    /// Provider failing every query with `error`.
    #[must_use]
    pub const fn with_error(error: PlacesError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl PlacesProvider for StubPlacesProvider {
    fn nearby_places(&self, _query: &NearbyQuery) -> Result<Vec<RawPlace>, PlacesError> {
        self.response.clone()
    }
}

/// Build a place `offset_km` due north of `origin` tagged with `types`.
///
/// Moving along a meridian keeps the haversine distance equal to the offset,
/// so tests can reason about exact kilometres.
///
/// # Panics
/// Panics when the offset pushes the latitude past the north pole.
#[expect(
    clippy::float_arithmetic,
    reason = "converts an arc length to degrees of latitude"
)]
#[expect(clippy::expect_used, reason = "test helper with fixed inputs")]
#[must_use]
pub fn place_at_offset_km(name: &str, origin: Coordinate, offset_km: f64, types: &[&str]) -> RawPlace {
    let latitude = origin.latitude() + (offset_km / EARTH_RADIUS_KM).to_degrees();
    let location =
        Coordinate::new(latitude, origin.longitude()).expect("offset stays below the pole");
    RawPlace::new(name, location).with_types(types.iter().copied())
}
