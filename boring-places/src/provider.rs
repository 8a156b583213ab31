//! HTTP-based `PlacesProvider` using the Places Nearby Search endpoint.
//!
//! The [`PlacesProvider`] trait is synchronous so the engine stays usable
//! from plain blocking code. [`HttpPlacesProvider`] bridges to `reqwest` by
//! blocking on a Tokio runtime it owns, or on the caller's multi-threaded
//! runtime when one is active.

use std::time::Duration;

use boring_core::{Coordinate, NearbyQuery, PlacesError, PlacesProvider, RawPlace};
use log::{debug, warn};
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::google::{NearbySearchResponse, PlaceResult};

/// Root of the Google Places web service.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Default user agent for places requests.
pub const DEFAULT_USER_AGENT: &str = "boring-places/0.1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const NEARBY_SEARCH_PATH: &str = "nearbysearch/json";

/// Error type for [`HttpPlacesProvider`] construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderBuildError {
    /// The configured base URL could not be parsed.
    #[error("invalid places base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpPlacesProvider`].
///
/// The `Debug` output redacts the API key.
#[derive(Clone)]
pub struct HttpPlacesProviderConfig {
    /// Places service root, e.g. [`DEFAULT_PLACES_BASE_URL`].
    pub base_url: String,
    /// Service credential. Empty means unset.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpPlacesProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("HttpPlacesProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &key)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for HttpPlacesProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACES_BASE_URL.to_owned(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpPlacesProviderConfig {
    /// Configuration for the public service using `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point the provider at another service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Places provider calling the Nearby Search endpoint over HTTP.
///
/// Only the first page of results is read. A `next_page_token` in the
/// response is logged and otherwise ignored.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own current-thread
/// runtime. Inside a multi-threaded runtime it uses
/// [`tokio::task::block_in_place`] on the caller's handle. Inside a
/// `current_thread` runtime it falls back to its own runtime, which blocks
/// the caller's executor for the duration of the request.
pub struct HttpPlacesProvider {
    client: Client,
    config: HttpPlacesProviderConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpPlacesProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPlacesProvider")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpPlacesProvider {
    /// Provider for the public service using `api_key`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpPlacesProviderConfig::new(api_key))
    }

    /// Provider with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpPlacesProviderConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = nearby_search_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// The Nearby Search endpoint without query parameters.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Build the request URL, credential included.
    fn build_search_url(&self, query: &NearbyQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(
                "location",
                &format!(
                    "{},{}",
                    query.location.latitude(),
                    query.location.longitude()
                ),
            );
            pairs.append_pair("radius", &query.radius_m.to_string());
            if !query.categories.is_empty() {
                let types: Vec<&str> = query.categories.iter().map(|c| c.as_str()).collect();
                pairs.append_pair("type", &types.join("|"));
            }
            pairs.append_pair("key", &self.config.api_key);
        }
        url
    }

    async fn fetch_places_async(&self, query: &NearbyQuery) -> Result<Vec<RawPlace>, PlacesError> {
        let url = self.build_search_url(query);
        debug!(
            "requesting places within {} m of ({}, {})",
            query.radius_m,
            query.location.latitude(),
            query.location.longitude()
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err))?;

        let body: NearbySearchResponse =
            response
                .json()
                .await
                .map_err(|err| PlacesError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        convert_response(body)
    }

    /// Convert a reqwest error to a `PlacesError`.
    ///
    /// The request URL is stripped because it carries the API key.
    fn convert_reqwest_error(&self, error: reqwest::Error) -> PlacesError {
        let endpoint = self.endpoint.as_str().to_owned();
        if error.is_timeout() {
            return PlacesError::Timeout {
                endpoint,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let redacted = error.without_url();
        if let Some(status) = redacted.status() {
            return PlacesError::HttpError {
                endpoint,
                status: status.as_u16(),
                message: redacted.to_string(),
            };
        }

        PlacesError::NetworkError {
            endpoint,
            message: redacted.to_string(),
        }
    }
}

impl PlacesProvider for HttpPlacesProvider {
    /// Fetch the first page of places around `query.location`.
    ///
    /// # Runtime requirements
    ///
    /// When called inside a Tokio runtime, that runtime should be
    /// multi-threaded; see the type-level documentation.
    fn nearby_places(&self, query: &NearbyQuery) -> Result<Vec<RawPlace>, PlacesError> {
        if self.config.api_key.trim().is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        let future = self.fetch_places_async(query);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

fn nearby_search_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/{NEARBY_SEARCH_PATH}", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

/// Map a decoded response to raw places, or to the error its status implies.
fn convert_response(response: NearbySearchResponse) -> Result<Vec<RawPlace>, PlacesError> {
    if response.is_denied() {
        return Err(PlacesError::RequestDenied {
            message: response.error_message.unwrap_or_default(),
        });
    }
    if !response.is_ok() {
        return Err(PlacesError::ServiceError {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }
    if response.next_page_token.is_some() {
        warn!(
            "places service reported further result pages; only the first {} results are used",
            response.results.len()
        );
    }

    response.results.into_iter().map(convert_place).collect()
}

fn convert_place(place: PlaceResult) -> Result<RawPlace, PlacesError> {
    let location = Coordinate::new(place.geometry.location.lat, place.geometry.location.lng)
        .map_err(|err| PlacesError::ParseError {
            message: format!("place '{}' has an invalid location: {err}", place.name),
        })?;
    Ok(RawPlace {
        name: place.name,
        types: place.types,
        rating: place.rating,
        user_ratings_total: place.user_ratings_total,
        location,
        address: place.vicinity.unwrap_or_default(),
    })
}
