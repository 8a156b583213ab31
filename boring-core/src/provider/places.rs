//! Places provider trait and the query it answers.

use crate::{Category, Coordinate, RawPlace};

use super::error::PlacesError;

/// Search radius used when a caller does not pick one, in metres.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5_000;

/// Parameters for a nearby-places lookup.
///
/// # Examples
/// ```
/// use boring_core::{Category, Coordinate, NearbyQuery};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let query = NearbyQuery::new(Coordinate::new(51.5, -0.12)?)
///     .with_radius_m(2_000)
///     .with_categories([Category::Bar, Category::Casino]);
/// assert_eq!(query.radius_m, 2_000);
/// assert_eq!(query.categories.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Centre of the search.
    pub location: Coordinate,
    /// Search radius in metres.
    pub radius_m: u32,
    /// Categories to ask the service for. Empty means no category hint.
    pub categories: Vec<Category>,
}

impl NearbyQuery {
    /// Query around `location` with the default radius and no category hint.
    #[must_use]
    pub const fn new(location: Coordinate) -> Self {
        Self {
            location,
            radius_m: DEFAULT_SEARCH_RADIUS_M,
            categories: Vec::new(),
        }
    }

    /// Set the search radius.
    #[must_use]
    pub const fn with_radius_m(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Replace the category hint.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }
}

/// Look up the places around a location.
///
/// Implementations return places in the service's order and must not filter
/// by category themselves; the engine's allow-list does that.
///
/// # Examples
///
/// ```rust
/// use boring_core::{Coordinate, NearbyQuery, PlacesError, PlacesProvider, RawPlace};
///
/// struct SingleBar;
///
/// impl PlacesProvider for SingleBar {
///     fn nearby_places(&self, query: &NearbyQuery) -> Result<Vec<RawPlace>, PlacesError> {
///         Ok(vec![RawPlace::new("Local", query.location).with_types(["bar"])])
///     }
/// }
///
/// let query = NearbyQuery::new(Coordinate::new(0.0, 0.0).expect("valid"));
/// let places = SingleBar.nearby_places(&query)?;
/// assert_eq!(places.len(), 1);
/// # Ok::<(), PlacesError>(())
/// ```
pub trait PlacesProvider {
    /// Return the places around `query.location`.
    ///
    /// # Errors
    /// Returns [`PlacesError`] when the service cannot be reached, refuses
    /// the request, or answers with a malformed body.
    fn nearby_places(&self, query: &NearbyQuery) -> Result<Vec<RawPlace>, PlacesError>;
}
