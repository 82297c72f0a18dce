/// Failures a network round trip can produce.
///
/// The request client recovers nothing locally: every variant is logged at
/// the client boundary and propagated to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-success status code.
    #[error("server responded with status {status}")]
    Status { status: reqwest::StatusCode },
    /// The response body was not valid JSON (or a request body could not be
    /// encoded, which for plain JSON values does not happen in practice).
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
    /// The round trip itself failed: DNS, refused connection, closed socket.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
}
