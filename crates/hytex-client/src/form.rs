//! Form submission orchestration.
//!
//! Binds a form's submit events to the network transport and coordinates the
//! loading indicator and toast notifications around each round trip. Two
//! distinct failure modes are kept apart on purpose:
//!
//! - *protocol failure*: the transport succeeded but the body declares
//!   `success: false`. Surfaced as an error toast and delegated to
//!   `on_error`.
//! - *transport failure*: a non-success status, a malformed body, or a
//!   network error. Surfaced as one generic toast and logged; `on_error`
//!   is not invoked.

use hytex_bridge::api::ApiResponse;
use hytex_bridge::event::SubmitEvent;
use hytex_ui::{LoadingIndicator, Notifier, Subscription};
use serde_json::{Map, Value};
use tokio::sync::mpsc::Receiver;

use crate::transport::Transport;

/// UI feedback handles the orchestrator drives around each submission.
#[derive(Clone)]
pub struct Feedback {
    pub notifier: Notifier,
    pub loading: LoadingIndicator,
}

/// A form on the page: its identifier plus the stream of submit gestures the
/// renderer observes on it.
pub struct FormSource {
    pub id: String,
    pub submits: Receiver<SubmitEvent>,
}

type ValidateFn = Box<dyn Fn(&Map<String, Value>) -> bool + Send + Sync>;
type ResponseFn = Box<dyn Fn(&ApiResponse) + Send + Sync>;

/// Optional hooks around a bound form.
#[derive(Default)]
pub struct SubmitOptions {
    /// Pre-submission predicate over the collected field map. A rejection
    /// short-circuits the submission entirely: no request, no loading
    /// change, no notification.
    pub validate: Option<ValidateFn>,
    /// Invoked with the response body after a `success: true` outcome.
    pub on_success: Option<ResponseFn>,
    /// Invoked with the response body after a protocol failure. Never
    /// invoked for transport failures.
    pub on_error: Option<ResponseFn>,
}

impl SubmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(predicate));
        self
    }

    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ApiResponse) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ApiResponse) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(callback));
        self
    }
}

/// Binds a form's submit events to a POST against `submit_url`.
///
/// Submissions are processed one at a time in arrival order. An absent form
/// (`None`) yields an inert subscription. The listener stops when the
/// returned [`Subscription`] is dropped or unbound, or when the submit
/// source closes; a round trip already in flight still runs to completion
/// from the server's point of view.
pub fn bind_form_submission<T>(
    form: Option<FormSource>,
    submit_url: impl Into<String>,
    options: SubmitOptions,
    feedback: Feedback,
    transport: T,
) -> Subscription
where
    T: Transport,
{
    let Some(mut form) = form else {
        return Subscription::empty();
    };
    let url = submit_url.into();

    Subscription::from_task(tokio::spawn(async move {
        while let Some(submit) = form.submits.recv().await {
            handle_submit(&form.id, &url, &options, &feedback, &transport, submit).await;
        }
    }))
}

async fn handle_submit<T>(
    form_id: &str,
    url: &str,
    options: &SubmitOptions,
    feedback: &Feedback,
    transport: &T,
    submit: SubmitEvent,
) where
    T: Transport,
{
    let data = collect_fields(submit.fields);

    if let Some(validate) = &options.validate {
        if !validate(&data) {
            log::debug!("Form {form_id} submission rejected by validator");
            return;
        }
    }

    // Hidden exactly once when the guard drops, on every exit path.
    let _loading = feedback.loading.begin();

    match transport.post_json(url, &data).await {
        Ok(body) => {
            let response = parse_response(body);
            if response.success {
                let message = response
                    .message
                    .clone()
                    .unwrap_or_else(|| String::from("Success!"));
                feedback.notifier.success(message);
                if let Some(on_success) = &options.on_success {
                    on_success(&response);
                }
            } else {
                let message = response
                    .message
                    .clone()
                    .unwrap_or_else(|| String::from("An error occurred"));
                feedback.notifier.error(message);
                if let Some(on_error) = &options.on_error {
                    on_error(&response);
                }
            }
        }
        Err(error) => {
            feedback.notifier.error("Network error. Please try again.");
            log::error!("Form {form_id} submission to {url} failed: {error}");
        }
    }
}

/// Folds raw field values into a JSON object, last value winning per name.
fn collect_fields(fields: Vec<(String, String)>) -> Map<String, Value> {
    let mut data = Map::new();
    for (name, value) in fields {
        data.insert(name, Value::String(value));
    }
    data
}

/// A body that does not fit the contract (e.g. a bare array) counts as a
/// protocol failure with no message.
fn parse_response(body: Value) -> ApiResponse {
    serde_json::from_value(body).unwrap_or_default()
}
