//! Test helpers for temporary place files and stub providers.

use std::fs;

use boring_core::test_support::StubPlacesProvider;
use boring_core::{PlacesError, PlacesProvider};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::CliError;
use crate::assess::{AssessConfig, PlacesProviderBuilder};

/// Places around lower Manhattan: two allow-listed, one filtered out.
pub(super) const SAMPLE_PLACES: &str = r#"[
    {
        "name": "Jazz Bar",
        "types": ["bar", "point_of_interest"],
        "rating": 5.0,
        "userRatingsTotal": 200,
        "location": { "latitude": 40.7128, "longitude": -74.006 },
        "address": "1 Main St"
    },
    {
        "name": "Corner Cafe",
        "types": ["cafe"],
        "rating": 4.9,
        "userRatingsTotal": 800,
        "location": { "latitude": 40.713, "longitude": -74.006 }
    },
    {
        "name": "Old Chapel",
        "types": ["church", "place_of_worship"],
        "location": { "latitude": 40.7578, "longitude": -74.006 }
    }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Create a temporary directory with a UTF-8 root path.
pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Builder handing out a canned provider regardless of configuration.
#[derive(Debug)]
pub(super) struct StubProviderBuilder {
    provider: StubPlacesProvider,
}

impl StubProviderBuilder {
    pub(super) fn with_places_json(json: &str) -> Self {
        let places = serde_json::from_str(json).expect("sample places should decode");
        Self {
            provider: StubPlacesProvider::with_places(places),
        }
    }

    pub(super) const fn with_error(error: PlacesError) -> Self {
        Self {
            provider: StubPlacesProvider::with_error(error),
        }
    }
}

impl PlacesProviderBuilder for StubProviderBuilder {
    fn build(&self, _config: &AssessConfig) -> Result<Box<dyn PlacesProvider>, CliError> {
        Ok(Box::new(self.provider.clone()))
    }
}
