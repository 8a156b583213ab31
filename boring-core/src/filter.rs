//! Restrict provider results to allow-listed categories.

use std::str::FromStr;

use crate::{Category, RawPlace};

/// A raw place that passed the category filter, with its matched categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    /// The provider record.
    pub place: &'a RawPlace,
    /// Allow-listed categories of `place`, in provider order. Never empty.
    pub categories: Vec<Category>,
}

/// Category allow-list applied before scoring.
///
/// # Examples
/// ```
/// use boring_core::{Category, CategoryFilter, Coordinate, RawPlace};
///
/// # fn main() -> Result<(), boring_core::CoordinateError> {
/// let here = Coordinate::new(0.0, 0.0)?;
/// let places = vec![
///     RawPlace::new("Cafe", here).with_types(["cafe"]),
///     RawPlace::new("Pub", here).with_types(["restaurant", "bar"]),
/// ];
/// let kept = CategoryFilter::default().filter(&places);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].categories, vec![Category::Bar]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    allowed: Vec<Category>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(Category::ALL)
    }
}

impl CategoryFilter {
    /// Build a filter admitting only `allowed`.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = Category>) -> Self {
        let mut unique = Vec::new();
        for category in allowed {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self { allowed: unique }
    }

    /// The allow-listed categories.
    #[must_use]
    pub fn allowed(&self) -> &[Category] {
        &self.allowed
    }

    /// Return the allow-listed categories of `place`.
    ///
    /// Order follows `place.types`; repeated tags are reported once. Tags
    /// that are unknown or not allow-listed are skipped.
    #[must_use]
    pub fn categories_of(&self, place: &RawPlace) -> Vec<Category> {
        let mut matched = Vec::new();
        for category in place
            .types
            .iter()
            .filter_map(|tag| Category::from_str(tag).ok())
            .filter(|category| self.allowed.contains(category))
        {
            if !matched.contains(&category) {
                matched.push(category);
            }
        }
        matched
    }

    /// Report whether `place` carries at least one allow-listed category.
    #[must_use]
    pub fn admits(&self, place: &RawPlace) -> bool {
        !self.categories_of(place).is_empty()
    }

    /// Keep the places that carry an allow-listed category, preserving order.
    #[must_use]
    pub fn filter<'a>(&self, places: &'a [RawPlace]) -> Vec<Candidate<'a>> {
        places
            .iter()
            .filter_map(|place| {
                let categories = self.categories_of(place);
                (!categories.is_empty()).then_some(Candidate { place, categories })
            })
            .collect()
    }
}
