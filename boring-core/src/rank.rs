//! Order scored places from most to least interesting.

use crate::ScoredPlace;

/// Sort `scored` by descending interest score.
///
/// The sort is stable: places with equal interest keep their input order,
/// which is the provider's response order after filtering.
///
/// # Examples
/// ```
/// use boring_core::{Coordinate, RawPlace, rank, BoringnessEngine};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let user = Coordinate::new(0.0, 0.0)?;
/// let places = vec![
///     RawPlace::new("Quiet", user).with_types(["casino"]),
///     RawPlace::new("Popular", user).with_types(["bar"]).with_rating(4.8),
/// ];
/// let scored = BoringnessEngine::new().score_all(user, &places);
/// let ranked = rank(scored);
/// assert_eq!(ranked[0].name, "Popular");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank(mut scored: Vec<ScoredPlace>) -> Vec<ScoredPlace> {
    scored.sort_by(|a, b| b.interest_score.total_cmp(&a.interest_score));
    scored
}
