//! Seam between the form orchestrator and the network.

use std::future::Future;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::RequestError;
use crate::request::{RequestClient, RequestOptions};

/// Anything that can POST a JSON object and return the parsed response body.
///
/// The form orchestrator is generic over this trait so tests exercise the
/// full submission flow against an in-memory double instead of a server.
pub trait Transport: Send + Sync + 'static {
    fn post_json(
        &self,
        url: &str,
        body: &Map<String, Value>,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send;
}

impl Transport for RequestClient {
    fn post_json(
        &self,
        url: &str,
        body: &Map<String, Value>,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send {
        self.request(
            url,
            RequestOptions {
                method: Method::POST,
                body: Some(Value::Object(body.clone())),
                ..RequestOptions::default()
            },
        )
    }
}
