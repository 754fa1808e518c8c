//! Everything that can terminate a run short of success.

use thiserror::Error;

/// A terminal run failure. The `Display` text of each variant is exactly
/// what gets surfaced through the failure channel — nothing is retried.
#[derive(Debug, Error)]
pub enum RunError {
    /// A required input was absent, or empty after trimming.
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    /// The `action` input is not one of the recognized verbs.
    /// Historical wording: the list omits `get`/`set` and names `reset`.
    #[error("Invalid action: {0}. Valid actions are increment, decrement, reset.")]
    InvalidAction(String),

    /// The HTTP call itself failed (DNS, connect, TLS, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The service answered 2xx with a body that is not JSON.
    #[error(transparent)]
    MalformedBody(#[from] serde_json::Error),

    /// The service answered with a non-2xx status.
    #[error("Error performing action: {0}")]
    RemoteRejection(String),

    /// The service answered 2xx but reported `status: false`,
    /// carrying its own messages joined with `", "`.
    #[error("{0}")]
    ServiceError(String),

    /// A success body without an integral `data.value`.
    #[error("Invalid response from server.")]
    InvalidResponse,
}
