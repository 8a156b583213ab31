//! Great-circle distance between coordinates.

use crate::Coordinate;

/// Mean Earth radius used by [`distance_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance between `a` and `b` in kilometres.
///
/// The function is symmetric and returns `0.0` for identical inputs.
///
/// # Examples
/// ```
/// use boring_core::{Coordinate, distance_km};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let london = Coordinate::new(51.5074, -0.1278)?;
/// let paris = Coordinate::new(48.8566, 2.3522)?;
/// let km = distance_km(london, paris);
/// assert!((km - 343.5).abs() < 1.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let half_dlat = (b.latitude() - a.latitude()).to_radians() / 2.0;
    let half_dlon = (b.longitude() - a.longitude()).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    let bounded = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * bounded.sqrt().atan2((1.0 - bounded).sqrt())
}
