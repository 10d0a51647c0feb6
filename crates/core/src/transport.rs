//! Transport-failure classification independent of the HTTP library.

/// Coarse classification of a transport-level failure.
///
/// The HTTP layer in use (reqwest in `homelink_client`) produces one of
/// these from its own error representation; everything downstream matches on
/// the kind alone, so no operation code depends on how a particular
/// transport library spells "the host does not exist".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The host could not be resolved.
    HostNotFound,
    /// The request or response timed out.
    TimedOut,
    /// Any other transport failure.
    Other,
}
