//! Property-based tests for the scoring pipeline.
//!
//! # Invariants tested
//!
//! - **Distance:** symmetric, non-negative, zero for identical points.
//! - **Score bounds:** interest stays in `[0, 1]` and boring in `[0, 100]`.
//! - **Complement:** `boring_score == (1 - interest_score) * 100`.
//! - **Filter exclusivity:** only allow-listed places are scored.
//! - **Ranking:** output is non-increasing and ties keep input order.

use boring_core::{
    BoringnessEngine, Category, CategoryFilter, Coordinate, RawPlace, distance_km, rank,
};
use proptest::prelude::*;

const TAGS: [&str; 9] = [
    "bar",
    "night_club",
    "casino",
    "liquor_store",
    "place_of_worship",
    "cafe",
    "gym",
    "museum",
    "restaurant",
];

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(latitude, longitude)| {
        Coordinate::new(latitude, longitude).expect("strategy stays in range")
    })
}

fn nearby(origin: Coordinate) -> impl Strategy<Value = Coordinate> {
    (-0.2_f64..=0.2, -0.2_f64..=0.2).prop_map(move |(dlat, dlon)| {
        let latitude = (origin.latitude() + dlat).clamp(-90.0, 90.0);
        let longitude = (origin.longitude() + dlon).clamp(-180.0, 180.0);
        Coordinate::new(latitude, longitude).expect("clamped into range")
    })
}

fn place(origin: Coordinate) -> impl Strategy<Value = RawPlace> {
    (
        nearby(origin),
        proptest::sample::subsequence(TAGS.to_vec(), 0..=3),
        proptest::option::of(-1.0_f64..=6.0),
        proptest::option::of(0_u32..=1_000),
    )
        .prop_map(|(location, types, rating, total)| {
            let mut place = RawPlace::new("Generated", location).with_types(types);
            place.rating = rating;
            place.user_ratings_total = total;
            place
        })
}

fn area() -> impl Strategy<Value = (Coordinate, Vec<RawPlace>)> {
    (-60.0_f64..=60.0, -170.0_f64..=170.0)
        .prop_map(|(latitude, longitude)| {
            Coordinate::new(latitude, longitude).expect("strategy stays in range")
        })
        .prop_flat_map(|user| (Just(user), proptest::collection::vec(place(user), 0..20)))
        .prop_map(|(user, places)| {
            let named = places
                .into_iter()
                .enumerate()
                .map(|(index, mut place)| {
                    place.name = format!("place-{index}");
                    place
                })
                .collect();
            (user, named)
        })
}

fn position(name: &str) -> usize {
    name.trim_start_matches("place-")
        .parse()
        .expect("generated names carry their index")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric_and_non_negative(a in coordinate(), b in coordinate()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - backward).abs() <= 1e-6);
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn scores_stay_in_range_and_complement((user, places) in area()) {
        for scored in BoringnessEngine::new().score_all(user, &places) {
            prop_assert!((0.0..=1.0).contains(&scored.interest_score));
            prop_assert!((0.0..=100.0).contains(&scored.boring_score));
            prop_assert!(
                (scored.boring_score - (1.0 - scored.interest_score) * 100.0).abs() <= 1e-9
            );
        }
    }

    #[test]
    fn only_allow_listed_places_are_scored((user, places) in area()) {
        let filter = CategoryFilter::default();
        let expected = places.iter().filter(|place| filter.admits(place)).count();
        let scored = BoringnessEngine::new().score_all(user, &places);
        prop_assert_eq!(scored.len(), expected);
        for place in &scored {
            prop_assert!(!place.categories.is_empty());
            prop_assert!(place.categories.iter().all(|c| Category::ALL.contains(c)));
        }
    }

    #[test]
    fn ranking_is_non_increasing_and_stable((user, places) in area()) {
        let scored = BoringnessEngine::new().score_all(user, &places);
        let ranked = rank(scored);
        for (first, second) in ranked.iter().zip(ranked.iter().skip(1)) {
            prop_assert!(first.interest_score >= second.interest_score);
            if first.interest_score == second.interest_score {
                prop_assert!(position(&first.name) < position(&second.name));
            }
        }
    }

    #[test]
    fn empty_areas_report_defaults(user in coordinate()) {
        let report = BoringnessEngine::new().assess(user, &[]);
        prop_assert_eq!(report.area_stats.total_boring_score, 100.0);
        prop_assert_eq!(report.area_stats.num_places, 0);
        prop_assert_eq!(report.area_stats.average_distance_km, 0.0);
    }
}
