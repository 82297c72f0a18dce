//! JSON contract of the Hytex compression server.

use serde::{Deserialize, Serialize};

/// Application-level response body returned by every server endpoint.
///
/// The transport may succeed while the operation itself failed; the server
/// reports that through the `success` flag. A body without the flag counts
/// as a failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse {
    /// Whether the requested operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable message to surface to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific extra fields (e.g. compression stats, history
    /// entries), passed through to result callbacks untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
