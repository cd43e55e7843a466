//! Typed failures for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! API functions return these instead of panicking. State transitions absorb
//! them: a failed assist exchange becomes a fallback chat reply and a failed
//! trending fetch becomes an empty list.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while talking to the assistant backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No browser runtime is available (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}
