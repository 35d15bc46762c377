use thiserror::Error;

/// Reading a key from the remote store failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    /// The key has never been written.
    #[error("key not found")]
    NotFound,
    #[error("remote store unreachable: {0}")]
    Unreachable(String),
    /// The stored value does not decode, or violates a placement invariant.
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("read timed out")]
    TimedOut,
}

/// Writing a key to the remote store failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteError {
    /// The local role gate does not grant admin capability.
    #[error("write requires admin capability")]
    NotPermitted,
    #[error("remote store unreachable: {0}")]
    Unreachable(String),
    #[error("write rejected: {0}")]
    Rejected(String),
    #[error("could not encode value: {0}")]
    Encode(String),
    #[error("write timed out")]
    TimedOut,
}

/// The tracking subsystem could not turn an anchor id into a local pose.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("anchor {0} has expired")]
    Expired(String),
    #[error("anchor {0} is unknown")]
    Unknown(String),
    #[error("not enough tracking data to resolve the anchor")]
    InsufficientTracking,
    #[error("anchor service unreachable: {0}")]
    Unreachable(String),
    #[error("anchor resolve timed out")]
    TimedOut,
}

/// The tracking session (or a hosting request on it) failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("required capability not supported: {0}")]
    Unsupported(String),
    #[error("tracking session denied: {0}")]
    Denied(String),
    #[error("tracking subsystem unreachable: {0}")]
    Unreachable(String),
    #[error("tracking session is not running")]
    NotRunning,
    #[error("tracking request timed out")]
    TimedOut,
}

/// A placement record violates the data-model invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("rotation norm {0} is not within tolerance of 1")]
    NonUnitRotation(f32),
    #[error("scale component {0} is not strictly positive")]
    NonPositiveScale(f32),
    #[error("{0} contains a non-finite component")]
    NonFinite(&'static str),
}

impl From<PlacementError> for ReadError {
    fn from(err: PlacementError) -> Self {
        ReadError::Malformed(err.to_string())
    }
}

impl From<PlacementError> for WriteError {
    fn from(err: PlacementError) -> Self {
        WriteError::Encode(err.to_string())
    }
}

/// Why a resolution attempt went back to waiting for a trigger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveFailure {
    #[error("placement fetch failed: {0}")]
    Fetch(#[from] ReadError),
    #[error("anchor resolve failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// Why the admin's publish gesture did not produce a stored arrangement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PublishFailure {
    #[error("could not host a new anchor: {0}")]
    Host(#[from] TrackError),
    #[error("could not store the arrangement: {0}")]
    Write(#[from] WriteError),
}
