//! Fetch failure taxonomy.
//!
//! Every variant is the same user-visible failure ("the server could not be
//! reached"); the variants only sharpen the diagnostic log line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Text shown to the user for any failed backend call.
pub const FETCH_FAILED_MESSAGE: &str = "Problem contacting the server – try again";

/// Errors produced by backend requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or did not complete.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Network access is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl FetchError {
    /// Message for the transient notification.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
