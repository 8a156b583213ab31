//! Validated WGS84 coordinates.
//!
//! Every coordinate entering the engine passes through [`Coordinate::new`],
//! so downstream code never sees a latitude outside `[-90, 90]`, a longitude
//! outside `[-180, 180]`, or a non-finite value.

use geo::Coord;
use thiserror::Error;

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use boring_core::Coordinate;
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let point = Coordinate::new(51.5074, -0.1278)?;
/// assert_eq!(point.latitude(), 51.5074);
/// assert_eq!(point.longitude(), -0.1278);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCoordinate", rename_all = "camelCase")
)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was NaN or infinite.
    #[error("latitude must be a finite number")]
    NonFiniteLatitude,
    /// Longitude was NaN or infinite.
    #[error("longitude must be a finite number")]
    NonFiniteLongitude,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside the range -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside the range -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validate and construct a [`Coordinate`].
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// out of range. Bounds are inclusive.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude);
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude);
        }
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    /// Interpret a `geo` coordinate as `x = longitude`, `y = latitude`.
    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

/// Unvalidated wire shape used while deserialising.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}
