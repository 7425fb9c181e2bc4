use thiserror::Error;

/// Anything that stops a check after the address was accepted.
/// Rendered in-page as `❌ Error: <display>`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned invalid JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot convert {value} to an integer: {reason}")]
    Amount { value: String, reason: String },
}
