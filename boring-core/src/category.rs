//! Place categories eligible for scoring.
//!
//! The enum offers compile-time safety for allow-list lookups. Tags use the
//! provider's lowercase snake-case spelling.
//!
//! # Examples
//! ```
//! use boring_core::Category;
//!
//! assert_eq!(Category::NightClub.as_str(), "night_club");
//! assert_eq!(Category::Bar.to_string(), "bar");
//! ```

/// An allow-listed place category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Category {
    /// Bars and pubs.
    Bar,
    /// Night clubs.
    NightClub,
    /// Casinos.
    Casino,
    /// Off-licences and liquor stores.
    LiquorStore,
    /// Churches, temples, mosques and other places of worship.
    PlaceOfWorship,
}

impl Category {
    /// The default allow-list in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Bar,
        Self::NightClub,
        Self::Casino,
        Self::LiquorStore,
        Self::PlaceOfWorship,
    ];

    /// Return the provider tag for this category.
    ///
    /// # Examples
    /// ```
    /// use boring_core::Category;
    ///
    /// assert_eq!(Category::PlaceOfWorship.as_str(), "place_of_worship");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::NightClub => "night_club",
            Self::Casino => "casino",
            Self::LiquorStore => "liquor_store",
            Self::PlaceOfWorship => "place_of_worship",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown place category '{s}'"))
    }
}
