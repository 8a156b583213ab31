use thiserror::Error;

/// Errors from [`crate::provider::PlacesProvider::nearby_places`].
///
/// Variants never carry the service credential, so they are safe to log and
/// to show to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacesError {
    /// The provider has no API key configured.
    #[error("places API key is not configured")]
    MissingApiKey,
    /// The service refused the request, usually because of the API key.
    #[error("places request denied: {message}")]
    RequestDenied {
        /// Explanation supplied by the service.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("places service returned status {status}: {message}")]
    ServiceError {
        /// Status string reported by the service.
        status: String,
        /// Explanation supplied by the service, possibly empty.
        message: String,
    },
    /// The HTTP exchange failed with an error status code.
    #[error("places request to {endpoint} failed with HTTP {status}: {message}")]
    HttpError {
        /// Endpoint without query parameters.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Transport error description.
        message: String,
    },
    /// The request did not complete in time.
    #[error("places request to {endpoint} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint without query parameters.
        endpoint: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service could not be reached.
    #[error("network error contacting {endpoint}: {message}")]
    NetworkError {
        /// Endpoint without query parameters.
        endpoint: String,
        /// Transport error description.
        message: String,
    },
    /// The response body was malformed.
    #[error("failed to parse places response: {message}")]
    ParseError {
        /// Description of the problem.
        message: String,
    },
}
