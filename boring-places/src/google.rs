//! Response types for the Places Nearby Search endpoint.
//!
//! Only the fields the engine reads are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// Top-level Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Request status such as `"OK"`, `"ZERO_RESULTS"` or `"REQUEST_DENIED"`.
    pub status: String,

    /// Explanation accompanying a non-success status.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Places on this page.
    #[serde(default)]
    pub results: Vec<PlaceResult>,

    /// Token for the next page, when the service has more results.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl NearbySearchResponse {
    /// Whether the status carries usable (possibly empty) results.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK" || self.status == "ZERO_RESULTS"
    }

    /// Whether the service refused the request outright.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        self.status == "REQUEST_DENIED"
    }
}

/// One place in a Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    /// Short address of the place.
    pub vicinity: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
