//! Place records flowing through the scoring pipeline.
//!
//! [`RawPlace`] mirrors what a places provider returns. [`ScoredPlace`] is
//! the immutable result of scoring one allow-listed place for a user.

use crate::{Category, Coordinate};

/// A nearby place as reported by a places provider.
///
/// Rating and rating count are optional; the scorer treats a missing value
/// as the worst case rather than rejecting the place.
///
/// # Examples
/// ```
/// use boring_core::{Coordinate, RawPlace};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let place = RawPlace::new("The Crown", Coordinate::new(51.5, -0.12)?)
///     .with_types(["bar", "point_of_interest"])
///     .with_rating(4.2)
///     .with_user_ratings_total(310);
/// assert_eq!(place.types, vec!["bar", "point_of_interest"]);
/// assert_eq!(place.rating, Some(4.2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawPlace {
    /// Display name.
    pub name: String,
    /// Provider category tags in provider order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// Average rating in `[0, 5]`, when the provider has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    /// Number of ratings behind [`RawPlace::rating`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_ratings_total: Option<u32>,
    /// Position of the place.
    pub location: Coordinate,
    /// Human-readable address or vicinity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
}

impl RawPlace {
    /// Construct a place with no tags, rating or address.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            rating: None,
            user_ratings_total: None,
            location,
            address: String::new(),
        }
    }

    /// Replace the category tags.
    #[must_use]
    pub fn with_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the average rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the number of ratings.
    #[must_use]
    pub fn with_user_ratings_total(mut self, total: u32) -> Self {
        self.user_ratings_total = Some(total);
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// Rating signals with defaults applied, ready for scoring.
///
/// This is the single place where absent or malformed optional fields are
/// resolved: a missing or non-finite rating becomes `0.0`, ratings are
/// clamped into `0.0..=max_rating`, and a missing count becomes `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceSignals {
    /// Rating in `0.0..=max_rating`.
    pub rating: f64,
    /// Number of ratings.
    pub rating_count: u32,
}

impl PlaceSignals {
    /// Normalise the optional fields of `place`.
    ///
    /// # Examples
    /// ```
    /// use boring_core::{Coordinate, PlaceSignals, RawPlace};
    ///
    /// # fn main() -> Result<(), boring_core::CoordinateError> {
    /// let place = RawPlace::new("Unrated", Coordinate::new(0.0, 0.0)?);
    /// let signals = PlaceSignals::from_place(&place, 5.0);
    /// assert_eq!(signals.rating, 0.0);
    /// assert_eq!(signals.rating_count, 0);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn from_place(place: &RawPlace, max_rating: f64) -> Self {
        let rating = place
            .rating
            .filter(|value| value.is_finite())
            .map_or(0.0, |value| value.clamp(0.0, max_rating.max(0.0)));
        Self {
            rating,
            rating_count: place.user_ratings_total.unwrap_or(0),
        }
    }
}

/// Per-component breakdown of an interest score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreDetails {
    /// Proximity component in `[0, 1]`.
    pub distance_component: f64,
    /// Rating component in `[0, 1]`.
    pub rating_component: f64,
    /// Rating-volume component in `[0, 1]`.
    pub rating_count_component: f64,
}

/// An allow-listed place scored for one user location.
///
/// `boring_score` is always `(1 - interest_score) * 100`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoredPlace {
    /// Display name.
    pub name: String,
    /// Human-readable address.
    pub address: String,
    /// Allow-listed categories of the place, in provider order. Never empty.
    pub categories: Vec<Category>,
    /// Position of the place.
    pub location: Coordinate,
    /// Rating as reported by the provider.
    pub rating: Option<f64>,
    /// Rating count as reported by the provider.
    pub user_ratings_total: Option<u32>,
    /// Great-circle distance from the user, in kilometres.
    pub distance_from_user_km: f64,
    /// Whether the place lies within the scoring radius.
    pub within_radius: bool,
    /// Interest in `[0, 1]`; higher is more interesting.
    pub interest_score: f64,
    /// Boringness in `[0, 100]`; higher is duller.
    pub boring_score: f64,
    /// Component breakdown of [`ScoredPlace::interest_score`].
    pub score_details: ScoreDetails,
}
