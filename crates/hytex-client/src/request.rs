//! HTTP request client for the compression server's JSON API.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::RequestError;

/// Per-request configuration.
///
/// Headers start from a default `Content-Type: application/json` and are
/// shallow-merged with the caller's map, caller values winning per name.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// HTTP method; defaults to GET.
    pub method: Method,
    /// Caller-supplied headers, overriding the defaults on collision.
    pub headers: HeaderMap,
    /// JSON body to send, if any.
    pub body: Option<Value>,
}

/// Shared HTTP client for making efficient, pooled requests.
///
/// The call suspends the current task for the round trip and nothing else.
/// No timeout or cancellation is imposed here, so an issued request always
/// runs to completion.
#[derive(Clone)]
pub struct RequestClient {
    http: reqwest::Client,
}

impl RequestClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Issues a request and parses the JSON response body.
    ///
    /// Fails with [`RequestError::Status`] on a non-success status,
    /// [`RequestError::Parse`] on a malformed body, and
    /// [`RequestError::Network`] when the round trip itself fails. Every
    /// failure is logged here before propagating.
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        self.dispatch(url, options)
            .await
            .inspect_err(|error| log::error!("Request to {url} failed: {error}"))
    }

    async fn dispatch(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let request = self.build_request(url, options)?;
        log::debug!("Dispatching {} {url}", request.method());

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status { status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn build_request(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Request, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut builder = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(serde_json::to_string(&body)?);
        }
        Ok(builder.build()?)
    }
}

impl Default for RequestClient {
    fn default() -> Self {
        Self::new()
    }
}
