//! Oracle failure modes
//!
//! Every variant means "no usable proposal"; semantic quality of a
//! proposal that did arrive is judged downstream, never here.

/// Errors from the proposal backend
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Request exceeded the configured deadline
    #[error("proposal request timed out")]
    Timeout,

    /// Transport-level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend rejected the request
    #[error("backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// No API key configured for an authenticated backend
    #[error("no api key configured")]
    MissingApiKey,

    /// Backend answered with no content or an empty proposal
    #[error("backend returned an empty proposal")]
    EmptyResponse,

    /// Reply could not be parsed into a sequence
    #[error("unparseable proposal: {0}")]
    Malformed(String),
}
