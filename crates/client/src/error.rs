//! Client error types.

use homelink_core::transport::TransportErrorKind;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur during gateway operations.
///
/// Exactly one variant describes any failed call. The set is closed: the UI
/// layer matches on it to decide what to present, so a new failure class
/// gets its own variant rather than hiding inside `Unknown`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No gateway base URL is configured; detected before any network
    /// activity.
    #[error("gateway base URL is not configured")]
    NotConfigured,

    /// The base URL is malformed, or the host could not be resolved.
    #[error("gateway URL is invalid or unreachable")]
    WrongUrl,

    /// The transport gave up waiting for the gateway.
    #[error("request timed out")]
    TimedOut,

    /// A response arrived but its body could not be read.
    #[error("gateway response could not be read")]
    NoResponse,

    /// The gateway answered with a non-200 status. The message is taken
    /// from the error envelope when one decodes, empty otherwise.
    #[error("gateway returned {status}: {message}")]
    Server { status: u16, message: String },

    /// A success body (or the POST request body) failed JSON
    /// (de)serialization.
    #[error("payload could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    /// The gateway accepted an operation but confirmed it with something
    /// other than the literal `OK`.
    #[error("gateway sent an unexpected confirmation")]
    BadResponse,

    /// Any other transport failure, original cause preserved for
    /// diagnostics.
    #[error("request failed: {0}")]
    Unknown(#[source] reqwest::Error),
}

impl ApiError {
    /// Map a transport-level failure onto the taxonomy.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        match classify_transport(&error) {
            TransportErrorKind::HostNotFound => ApiError::WrongUrl,
            TransportErrorKind::TimedOut => ApiError::TimedOut,
            TransportErrorKind::Other => ApiError::Unknown(error),
        }
    }
}

/// Classify a reqwest error into a transport-independent kind.
///
/// This is the only place that inspects reqwest's error shape. Host
/// resolution failures are not exposed structurally, so the source chain is
/// sniffed for the resolver's wording.
pub(crate) fn classify_transport(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        return TransportErrorKind::TimedOut;
    }
    if error.is_connect() && mentions_dns_failure(error) {
        return TransportErrorKind::HostNotFound;
    }
    TransportErrorKind::Other
}

fn mentions_dns_failure(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        source = cause.source();
    }
    false
}
