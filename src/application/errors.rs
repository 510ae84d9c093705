// Pipeline error types
use thiserror::Error;

/// Failures that abort a dashboard load before anything is rendered.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Connection or transport failure while talking to the summary endpoint
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The summary endpoint answered with a non-2xx status
    #[error("summary endpoint returned HTTP {code}")]
    HttpStatus { code: u16 },

    /// The body is not a well-formed summary payload
    #[error("could not decode summary: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}
